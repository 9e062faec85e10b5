use school_helper::model::Role;
use school_helper::model::parser::{format_grade, parse_grade};
use school_helper::{GradeStore, HelperError};

#[test]
fn test_average_of_two_grades_for_single_student() {
    let mut store = GradeStore::new();
    store.add_grade("Math", "Alice", 4.0).unwrap();
    store.add_grade("Math", "Alice", 5.0).unwrap();

    assert_eq!(store.statistics(), vec![("Math", 4.5)]);
    assert_eq!(
        store.display_statistics(),
        vec!["Статистика успеваемости:", "Math: Средний балл - 4.5"]
    );
}

#[test]
fn test_average_spans_all_students_and_rounds() {
    let mut store = GradeStore::new();
    store.add_grade("Physics", "Alice", 5.0).unwrap();
    store.add_grade("Physics", "Bob", 4.0).unwrap();
    store.add_grade("Physics", "Bob", 4.0).unwrap();

    // (5 + 4 + 4) / 3 = 4.333...
    assert_eq!(store.statistics(), vec![("Physics", 4.33)]);
}

#[test]
fn test_grades_outside_range_are_refused() {
    let mut store = GradeStore::new();

    assert_eq!(
        store.add_grade("Math", "Alice", 5.5).unwrap_err(),
        HelperError::GradeOutOfRange(5.5)
    );
    assert!(store.add_grade("Math", "Alice", -0.1).is_err());
    assert!(store.add_grade("Math", "Alice", f64::NAN).is_err());
    assert!(store.is_empty());

    store.add_grade("Math", "Alice", 0.0).unwrap();
    store.add_grade("Math", "Alice", 5.0).unwrap();
    assert_eq!(store.grades_for("Math", "Alice").unwrap(), [0.0, 5.0]);
}

#[test]
fn test_grade_needs_subject_and_student() {
    let mut store = GradeStore::new();
    assert_eq!(
        store.add_grade(" ", "Alice", 3.0).unwrap_err(),
        HelperError::EmptyGradeFields
    );
    assert_eq!(
        store.add_grade("Math", "", 3.0).unwrap_err(),
        HelperError::EmptyGradeFields
    );
}

#[test]
fn test_grade_parsing() {
    assert_eq!(parse_grade("4").unwrap(), 4.0);
    assert_eq!(parse_grade(" 3.5 ").unwrap(), 3.5);
    assert_eq!(parse_grade("4,5").unwrap(), 4.5);
    assert!(matches!(parse_grade("five"), Err(HelperError::GradeNotANumber(_))));
    assert_eq!(format_grade(4.0), "4.0");
    assert_eq!(format_grade(4.25), "4.25");
}

#[test]
fn test_empty_store_messages() {
    let store = GradeStore::new();
    assert_eq!(
        store.display_grades(Role::Teacher, None, Some("Math")),
        vec!["Оценки отсутствуют."]
    );
    assert_eq!(
        store.display_statistics(),
        vec!["Статистика отсутствует, так как нет оценок."]
    );
}

fn populated() -> GradeStore {
    let mut store = GradeStore::new();
    store.add_grade("Math", "Alice", 4.0).unwrap();
    store.add_grade("Math", "Alice", 5.0).unwrap();
    store.add_grade("History", "Alice", 3.0).unwrap();
    store.add_grade("History", "Bob", 2.5).unwrap();
    store
}

#[test]
fn test_teacher_sees_every_grade() {
    let lines = populated().display_grades(Role::Teacher, None, Some("Math"));

    assert_eq!(
        lines,
        vec![
            "Оценки по предметам:",
            "History:",
            "  Alice: 3.0",
            "  Bob: 2.5",
            "Math:",
            "  Alice: 4.0, 5.0",
        ]
    );
}

#[test]
fn test_student_sees_only_own_grades() {
    let lines = populated().display_grades(Role::Student, Some("Bob"), Some("Math"));

    assert_eq!(lines, vec!["Оценки ученика Bob:", "  History: 2.5"]);
}

#[test]
fn test_parent_gate_requires_grade_in_gate_subject() {
    let store = populated();

    let alice = store.display_grades(Role::Parent, Some("Alice"), Some("Math"));
    assert_eq!(
        alice,
        vec!["Оценки ученика Alice:", "  History: 3.0", "  Math: 4.0, 5.0"]
    );

    // Bob has no Math grade, so the default rule hides him.
    let bob = store.display_grades(Role::Parent, Some("Bob"), Some("Math"));
    assert_eq!(bob, vec!["Оценки ученика Bob недоступны."]);

    let bob_open = store.display_grades(Role::Parent, Some("Bob"), None);
    assert_eq!(bob_open, vec!["Оценки ученика Bob:", "  History: 2.5"]);
}

#[test]
fn test_unknown_student_gets_empty_report() {
    let lines = populated().display_grades(Role::Student, Some("Carol"), Some("Math"));
    assert_eq!(lines, vec!["Оценки ученика Carol:", "  Оценок нет."]);
}

#[test]
fn test_blank_student_name_shows_nothing() {
    let store = populated();

    assert!(store.display_grades(Role::Student, Some(""), None).is_empty());
    assert!(store.display_grades(Role::Parent, Some("   "), Some("Math")).is_empty());
}
