//! Markdown curriculum importer
//!
//! Reads a study-plan document whose headings announce the level, track, and
//! semester, followed by pipe tables listing the courses. Produces a
//! [`Curriculum`] that can be saved as the JSON the rest of the tool loads.

use crate::core::error::LoadError;
use crate::core::models::{CourseDefinition, CourseType, Curriculum, Level};
use regex_lite::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

const ELECTIVE_PREFIX: &str = "#### **Elective Courses";
const DEFAULT_TRACK: &str = "General";

/// Elective rows carry no credit-hours column
const ELECTIVE_CREDIT_HOURS: f64 = 3.0;

/// Main tables have more than this many `|`-separated cells
const MAIN_TABLE_MIN_CELLS: usize = 9;
const ELECTIVE_TABLE_MIN_CELLS: usize = 4;

/// Heading state carried across table rows
struct ParserState {
    level: Level,
    semester: String,
    track: String,
    in_electives: bool,
}

impl Default for ParserState {
    fn default() -> Self {
        Self {
            level: Level::default(),
            semester: "Unknown".to_string(),
            track: DEFAULT_TRACK.to_string(),
            in_electives: false,
        }
    }
}

static LEVEL_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^### \*\*(?P<level>\w+ Level)(?: – (?P<track>.+))?\*\*").expect("valid regex")
});
static SEMESTER_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#### \*\*(\d.. Semester)\*\*").expect("valid regex"));
static COURSE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}\d{3}$").expect("valid regex"));

/// `### **Third Level – Computer Science**` → ("Third Level", Some("Computer Science"))
fn parse_level_heading(line: &str) -> Option<(String, Option<String>)> {
    let caps = LEVEL_HEADING.captures(line)?;
    let track = caps
        .name("track")
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .map(ToString::to_string);
    Some((caps["level"].to_string(), track))
}

/// `#### **2nd Semester**` → "2nd Semester"
fn parse_semester_heading(line: &str) -> Option<String> {
    SEMESTER_HEADING
        .captures(line)
        .map(|caps| caps[1].to_string())
}

fn is_course_code(cell: &str) -> bool {
    COURSE_CODE.is_match(cell)
}

/// Comma-separated prerequisite list; `-` means none
fn parse_prerequisites(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != "-")
        .map(ToString::to_string)
        .collect()
}

/// Build a course from a table row, if the row describes one
fn parse_row(cells: &[&str], state: &ParserState) -> Option<(String, CourseDefinition)> {
    if cells.len() < ELECTIVE_TABLE_MIN_CELLS || cells[1].is_empty() {
        return None;
    }
    let code = cells[1];
    if !is_course_code(code) {
        return None;
    }

    let (name, credit_hours, prereqs) = if state.in_electives {
        let name = cells[2].split('/').next().unwrap_or_default().trim();
        (name, ELECTIVE_CREDIT_HOURS, cells[3])
    } else if cells.len() >= MAIN_TABLE_MIN_CELLS {
        let hours = cells[5].parse::<u32>().ok()?;
        (cells[2], f64::from(hours), cells[cells.len() - 2])
    } else {
        return None;
    };

    let course = CourseDefinition {
        name: name.to_string(),
        credit_hours,
        prerequisites: parse_prerequisites(prereqs),
        level: state.level.clone(),
        semester: state.semester.clone(),
        track: state.track.clone(),
        course_type: if state.in_electives {
            CourseType::Elective
        } else {
            CourseType::General
        },
    };
    Some((code.to_string(), course))
}

/// Parse a markdown study plan into a curriculum
///
/// Level headings (`### **First Level**`, optionally `– Track`) set level and
/// track, semester headings (`#### **1st Semester**`) set the slot, and
/// `#### **Elective Courses...` switches to elective tables until the next
/// heading. Rows whose code cell is not a course code, or whose credit-hours
/// cell does not parse, are ignored. A later row for the same code replaces
/// the earlier one.
///
/// # Errors
/// Returns [`LoadError::EmptyCurriculum`] if no course rows were found
pub fn parse_curriculum_markdown(content: &str) -> Result<Curriculum, LoadError> {
    let mut state = ParserState::default();
    let mut curriculum = Curriculum::new();

    for line in content.lines().map(str::trim) {
        if let Some((level, track)) = parse_level_heading(line) {
            state.level = Level::from(level);
            state.track = track.unwrap_or_else(|| DEFAULT_TRACK.to_string());
            state.in_electives = false;
            continue;
        }
        if let Some(semester) = parse_semester_heading(line) {
            state.semester = semester;
            state.in_electives = false;
            continue;
        }
        if line.starts_with(ELECTIVE_PREFIX) {
            state.in_electives = true;
            continue;
        }
        if !line.starts_with('|') {
            continue;
        }

        let cells: Vec<&str> = line.split('|').map(str::trim).collect();
        if let Some((code, course)) = parse_row(&cells, &state) {
            curriculum.insert(code, course);
        }
    }

    if curriculum.is_empty() {
        return Err(LoadError::EmptyCurriculum);
    }
    crate::info!("Parsed {} courses from markdown", curriculum.len());
    Ok(curriculum)
}

/// Convert a markdown study plan file into curriculum JSON
///
/// # Returns
/// The parsed curriculum, after it has been written to `output`
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails
pub fn import_markdown_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<Curriculum, LoadError> {
    let content = fs::read_to_string(input)?;
    let curriculum = parse_curriculum_markdown(&content)?;

    let output = output.as_ref();
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, curriculum.to_json_pretty()?)?;
    crate::verbose!("Curriculum data saved to {}", output.display());
    Ok(curriculum)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = "\
### **First Level**
#### **1st Semester**
| Code | Title | Lec | Lab | CH | Total | Notes | Prereq |
|---|---|---|---|---|---|---|---|
| BSD101 | Calculus | 2 | 2 | 3 | 100 | | - |
| CSD102 | Basics | 2 | 2 | 3 | 100 | | BSD101, |
| CSD103 | Broken | 2 | 2 | x | 100 | | - |
### **Third Level – Computer Science**
#### **2nd Semester**
| CSD311 | Compilers | 2 | 2 | 4 | 100 | | CSD102, BSD101 |
#### **Elective Courses (choose two)**
| CSD401 | Vision / Imaging | CSD311 |
";

    fn cells(line: &str) -> Vec<&str> {
        line.split('|').map(str::trim).collect()
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            parse_level_heading("### **Third Level – Software**"),
            Some(("Third Level".to_string(), Some("Software".to_string())))
        );
        assert_eq!(
            parse_level_heading("### **First Level**"),
            Some(("First Level".to_string(), None))
        );
        assert_eq!(parse_level_heading("### **Overview**"), None);
        assert_eq!(
            parse_semester_heading("#### **1st Semester**").as_deref(),
            Some("1st Semester")
        );
        assert_eq!(parse_semester_heading("#### **Summer Semester**"), None);
        assert_eq!(parse_level_heading("### **Level One**"), None);
        assert_eq!(
            parse_level_heading("### **Second Level – Data Science** (updated)"),
            Some(("Second Level".to_string(), Some("Data Science".to_string())))
        );
        assert_eq!(
            parse_semester_heading("#### **3rd Semester** (optional)").as_deref(),
            Some("3rd Semester")
        );
    }

    #[test]
    fn test_course_code_shape() {
        assert!(is_course_code("CSD102"));
        assert!(!is_course_code("csd102"));
        assert!(!is_course_code("CS1020"));
        assert!(!is_course_code("Code"));
        assert!(!is_course_code("CSD1023"));
    }

    #[test]
    fn test_parse_plan() {
        let curriculum = parse_curriculum_markdown(PLAN).unwrap();
        assert_eq!(curriculum.len(), 4);

        let basics = curriculum.get("CSD102").unwrap();
        assert_eq!(basics.level, Level::First);
        assert_eq!(basics.semester, "1st Semester");
        assert_eq!(basics.prerequisites, vec!["BSD101".to_string()]);
        assert!(!curriculum.contains("CSD103"));

        let compilers = curriculum.get("CSD311").unwrap();
        assert_eq!(compilers.level, Level::Third);
        assert_eq!(compilers.track, "Computer Science");
        assert!((compilers.credit_hours - 4.0).abs() < f64::EPSILON);
        assert_eq!(compilers.prerequisites.len(), 2);
    }

    #[test]
    fn test_elective_rows() {
        let curriculum = parse_curriculum_markdown(PLAN).unwrap();
        let vision = curriculum.get("CSD401").unwrap();
        assert_eq!(vision.name, "Vision");
        assert_eq!(vision.course_type, CourseType::Elective);
        assert!((vision.credit_hours - ELECTIVE_CREDIT_HOURS).abs() < f64::EPSILON);
        assert_eq!(vision.prerequisites, vec!["CSD311".to_string()]);
    }

    #[test]
    fn test_short_rows_outside_electives_ignored() {
        let state = ParserState::default();
        assert!(parse_row(&cells("| CSD401 | Vision | - |"), &state).is_none());
    }

    #[test]
    fn test_no_courses_is_error() {
        assert!(matches!(
            parse_curriculum_markdown("# Nothing here\n| a | b |"),
            Err(LoadError::EmptyCurriculum)
        ));
    }
}
