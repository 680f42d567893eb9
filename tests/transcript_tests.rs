//! End-to-end tests for transcript resolution and degree progress

use gpa_advisor::core::error::ProgressError;
use gpa_advisor::core::grading::{GradeScale, GradingScheme};
use gpa_advisor::core::loader::{load_student_file, parse_student_json};
use gpa_advisor::core::models::{
    CourseDefinition, Curriculum, Faculty, Level, RawAttempt, SemesterId, Status, StudentRecord,
};
use gpa_advisor::core::progress::evaluate_progress;
use gpa_advisor::core::transcript::{build_transcript, normalize, resolve};

const SAMPLE_STUDENT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/students/sample_response.json"
);

fn two_course_curriculum() -> Curriculum {
    let mut curriculum = Curriculum::new();
    curriculum.insert("A101", CourseDefinition::new("Intro", 3.0, Level::First));
    curriculum.insert(
        "A102",
        CourseDefinition::new("Next", 3.0, Level::First).with_prerequisite("A101"),
    );
    curriculum
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn pass_then_failed_retake() {
    let curriculum = two_course_curriculum();
    let student = StudentRecord::new(
        "21000001",
        vec![
            RawAttempt::new("A101", "1").with_score("90"),
            RawAttempt::new("A101", "2").with_score("40"),
        ],
    );

    let transcript = build_transcript(&student, &curriculum, &GradeScale::stepped());

    assert_eq!(transcript.completed.len(), 1);
    assert!(transcript.completed.contains("A101"));

    let counted = &transcript.counted["A101"];
    assert_eq!(counted.semester, SemesterId::from("2"));
    assert_eq!(counted.letter, "F");
    assert!(close(counted.grade_points, 0.0));

    let second = transcript.semester(&SemesterId::from("2")).unwrap();
    assert!(close(second.totals.total_hours, 3.0));
    assert!(close(second.totals.total_points, 0.0));

    let first = transcript.semester(&SemesterId::from("1")).unwrap();
    assert!(close(first.totals.total_hours, 0.0));
    assert_eq!(first.attempts.len(), 1);

    let progress = evaluate_progress(&curriculum, &transcript.completed).unwrap();
    let next = progress
        .remaining
        .iter()
        .find(|course| course.code == "A102")
        .unwrap();
    assert!(next.prereqs_satisfied);
    assert!(close(progress.earned_hours, 3.0));
}

#[test]
fn retakes_contribute_hours_once() {
    let curriculum = two_course_curriculum();
    for scores in [
        vec!["30", "40"],
        vec!["95", "97", "20"],
        vec!["55", "abc", "60", "99"],
    ] {
        let attempts = scores
            .iter()
            .enumerate()
            .map(|(i, score)| {
                RawAttempt::new("A101", SemesterId::new((i + 1).to_string())).with_score(*score)
            })
            .collect();
        let student = StudentRecord::new("21000001", attempts);

        for scheme in [GradingScheme::Stepped, GradingScheme::Banded] {
            let transcript = build_transcript(&student, &curriculum, &scheme.scale());
            assert!(
                close(transcript.cumulative.total_hours, 3.0),
                "scores {scores:?} under {scheme}"
            );
        }
    }
}

#[test]
fn completion_survives_later_failure() {
    let curriculum = two_course_curriculum();
    let student = StudentRecord::new(
        "21000001",
        vec![
            RawAttempt::new("A101", "1").with_score("88"),
            RawAttempt::new("A101", "3").with_score("10"),
        ],
    );
    let transcript = build_transcript(&student, &curriculum, &GradeScale::stepped());

    assert!(transcript.completed.contains("A101"));
    let counted = &transcript.counted["A101"];
    assert_eq!(counted.semester, SemesterId::from("3"));
    assert_eq!(counted.status(), Status::Failed);
    assert!(close(transcript.gpa(), 0.0));
}

#[test]
fn resolution_is_idempotent() {
    let curriculum = Curriculum::bundled(Faculty::ComputerScience).unwrap();
    let student = load_student_file(SAMPLE_STUDENT).unwrap();
    let scale = GradeScale::stepped();

    let attempts: Vec<_> = student
        .attempts
        .iter()
        .filter_map(|raw| normalize(raw, &curriculum, &scale).ok())
        .collect();
    assert_eq!(resolve(&attempts), resolve(&attempts));
    assert_eq!(
        build_transcript(&student, &curriculum, &scale),
        build_transcript(&student, &curriculum, &scale)
    );
}

#[test]
fn empty_curriculum_is_reported() {
    let transcript = build_transcript(
        &StudentRecord::default(),
        &Curriculum::new(),
        &GradeScale::stepped(),
    );
    assert_eq!(
        evaluate_progress(&Curriculum::new(), &transcript.completed),
        Err(ProgressError::ZeroCreditHours)
    );
}

#[test]
fn sample_student_against_bundled_curriculum() {
    let curriculum = Curriculum::bundled(Faculty::ComputerScience).unwrap();
    let student = load_student_file(SAMPLE_STUDENT).unwrap();
    let transcript = build_transcript(&student, &curriculum, &GradeScale::stepped());

    assert_eq!(transcript.skipped, 1);
    assert_eq!(transcript.semesters.len(), 3);
    assert_eq!(transcript.highest_level, 1);

    let fall = transcript.semester(&SemesterId::from("20211")).unwrap();
    assert_eq!(fall.title(), "2021/2022 - Fall");
    assert_eq!(fall.attempts.len(), 3);
    assert!(close(fall.gpa(), 3.6));

    let spring = transcript.semester(&SemesterId::from("20212")).unwrap();
    let algebra = spring.attempts.iter().find(|a| a.code == "BSD104").unwrap();
    assert_eq!(algebra.letter, "BF");
    assert_eq!(algebra.display, "70");
    assert_eq!(algebra.status(), Status::Failed);

    let later = transcript.semester(&SemesterId::from("20221")).unwrap();
    let stats = later.attempts.iter().find(|a| a.code == "BSD105").unwrap();
    assert_eq!(stats.status(), Status::InProgress);

    assert!(close(transcript.cumulative.total_points, 30.0));
    assert!(close(transcript.cumulative.total_hours, 12.0));
    assert!(close(transcript.gpa(), 2.5));

    for code in ["BSD101", "CSD102", "CSD106", "UNI-101"] {
        assert!(transcript.completed.contains(code), "{code} should be completed");
    }
    assert!(!transcript.completed.contains("BSD104"));

    let progress = evaluate_progress(&curriculum, &transcript.completed).unwrap();
    assert!(close(progress.earned_hours, 9.0));
    assert!(close(progress.total_hours, curriculum.total_credit_hours()));
    assert!(progress.completion_ratio().is_finite());
    let stats = progress
        .remaining
        .iter()
        .find(|course| course.code == "BSD105")
        .unwrap();
    assert!(stats.prereqs_satisfied);
}

#[test]
fn malformed_record_only_affects_itself() {
    let json = r#"{
        "StudentCode": "21000001",
        "studentProgress": [
            {"crscode": "A101", "yearsem": "1", "Degree": "91"},
            {"crscode": "A102", "yearsem": "1", "Degree": {"v": 1}},
            {"crscode": "A102", "yearsem": true, "Degree": "80"},
            "not a record"
        ]
    }"#;
    let student = parse_student_json(json).unwrap();
    assert_eq!(student.attempts.len(), 4);

    let transcript = build_transcript(&student, &two_course_curriculum(), &GradeScale::stepped());

    assert_eq!(transcript.skipped, 2);
    assert!(transcript.completed.contains("A101"));
    assert!(!transcript.completed.contains("A102"));

    let first = transcript.semester(&SemesterId::from("1")).unwrap();
    let unscored = first
        .attempts
        .iter()
        .find(|attempt| attempt.code == "A102")
        .unwrap();
    assert_eq!(unscored.status(), Status::InProgress);
    assert!(close(first.totals.total_hours, 3.0));
}
