//! Integration tests for student, curriculum, and markdown loading

use gpa_advisor::core::error::LoadError;
use gpa_advisor::core::loader::{
    import_markdown_file, load_curriculum_file, parse_student_json, read_student,
    validate_student_json,
};
use gpa_advisor::core::models::{CourseType, Level};
use std::fs;
use tempfile::TempDir;

const SAMPLE_STUDENT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/students/sample_response.json"
);
const SAMPLE_PLAN: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/curricula/sample.md");

#[test]
fn validate_sample_student() {
    let content = fs::read_to_string(SAMPLE_STUDENT).unwrap();
    let summary = validate_student_json(&content).unwrap();

    assert_eq!(summary.student_code, "21001234");
    assert_eq!(summary.total_records, 8);
    assert_eq!(summary.graded, 6);
    assert_eq!(summary.in_progress, 2);
}

#[test]
fn pasted_student_matches_file() {
    let content = fs::read_to_string(SAMPLE_STUDENT).unwrap();
    let pasted = read_student(format!("\n\n{content}\n").as_bytes()).unwrap();
    assert_eq!(pasted, parse_student_json(&content).unwrap());
}

#[test]
fn invalid_student_roots_are_labeled() {
    let err = parse_student_json(r#"{"StudentCode": "21001234"}"#).unwrap_err();
    assert_eq!(err.to_string(), "missing required field: studentProgress");

    let err = parse_student_json(r#"{"StudentCode": 1, "studentProgress": "none"}"#).unwrap_err();
    assert!(err.to_string().contains("studentProgress"));

    assert!(matches!(
        parse_student_json("not json"),
        Err(LoadError::Json(_))
    ));
}

#[test]
fn import_sample_plan_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out").join("curriculum.json");

    let imported = import_markdown_file(SAMPLE_PLAN, &output).unwrap();
    assert_eq!(imported.len(), 6);

    let loaded = load_curriculum_file(&output).unwrap();
    assert_eq!(loaded, imported);

    let compiler = loaded.get("CSD311").unwrap();
    assert_eq!(compiler.level, Level::Third);
    assert_eq!(compiler.track, "Computer Science");
    assert_eq!(compiler.semester, "1st Semester");
    assert_eq!(
        compiler.prerequisites,
        vec!["CSD106".to_string(), "BSD105".to_string()]
    );

    let vision = loaded.get("CSD401").unwrap();
    assert_eq!(vision.name, "Computer Vision");
    assert_eq!(vision.course_type, CourseType::Elective);

    let stats = loaded.get("BSD105").unwrap();
    assert_eq!(stats.semester, "2nd Semester");
    assert_eq!(stats.prerequisites, vec!["BSD101".to_string()]);
}

#[test]
fn import_without_courses_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.md");
    let output = dir.path().join("curriculum.json");
    fs::write(&input, "# Nothing to see\n\nJust prose.\n").unwrap();

    assert!(matches!(
        import_markdown_file(&input, &output),
        Err(LoadError::EmptyCurriculum)
    ));
    assert!(!output.exists());
}
