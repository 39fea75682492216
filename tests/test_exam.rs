//! Exam registry integration tests

use app_lib::app::{DeleteOutcome, ExamCreateReq, ExamRegistry};
use app_lib::domain::SEED_SUBJECTS;
use app_lib::error::AppError;
use app_lib::infra::db::init_test_db;
use app_lib::infra::SqliteExamStore;

// ──────────────────────── Helper ────────────────────────

fn registry() -> ExamRegistry<SqliteExamStore> {
    ExamRegistry::new(init_test_db())
}

fn req(subject: &str, date: &str, time: &str) -> ExamCreateReq {
    ExamCreateReq {
        subject: Some(subject.to_string()),
        date: date.to_string(),
        time: time.to_string(),
    }
}

// ══════════════════════════════════════════════════════════
//  add_exam
// ══════════════════════════════════════════════════════════

#[test]
fn add_exam_appends_exactly_one_record() {
    let reg = registry();
    reg.add_exam(req("JAVA", "2024-03-07", "09:30")).unwrap();
    let before = reg.list_exams().unwrap();

    let added = reg.add_exam(req("PYTHON", "2024-03-08", "14:00")).unwrap();
    let after = reg.list_exams().unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    let last = after.last().unwrap();
    assert_eq!(last, &added);
    assert_eq!(last.subject, "PYTHON");
    assert_eq!(last.date, "2024-03-08");
    assert_eq!(last.time, "14:00");
    assert!(before.iter().all(|e| e.id != added.id));
}

#[test]
fn add_exam_assigns_fresh_ids_even_after_delete() {
    let reg = registry();
    let a = reg.add_exam(req("JAVA", "2024-03-07", "09:30")).unwrap();
    reg.delete_exam(Some(a.id)).unwrap();
    let b = reg.add_exam(req("JAVA", "2024-03-07", "09:30")).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn add_exam_missing_subject_fails_without_mutation() {
    let reg = registry();
    reg.add_exam(req("JAVA", "2024-03-07", "09:30")).unwrap();
    let before = reg.list_exams().unwrap();

    for bad in [
        ExamCreateReq {
            subject: None,
            date: "2024-03-07".into(),
            time: "09:30".into(),
        },
        req("", "2024-03-07", "09:30"),
        req("   ", "2024-03-07", "09:30"),
    ] {
        let err = reg.add_exam(bad).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
    assert_eq!(reg.list_exams().unwrap(), before);
}

#[test]
fn add_exam_missing_date_or_time_fails_without_mutation() {
    let reg = registry();
    assert!(matches!(
        reg.add_exam(req("JAVA", "", "09:30")),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        reg.add_exam(req("JAVA", "2024-03-07", "")),
        Err(AppError::Validation(_))
    ));
    assert!(reg.list_exams().unwrap().is_empty());
}

#[test]
fn date_round_trips_unchanged() {
    let reg = registry();
    let added = reg.add_exam(req("HINDI", "2024-03-07", "10:00")).unwrap();
    let stored = reg.list_exams().unwrap();
    assert_eq!(stored[0].id, added.id);
    assert_eq!(stored[0].date, "2024-03-07");
}

#[test]
fn time_is_free_text() {
    let reg = registry();
    let added = reg.add_exam(req("COST", "2024-03-07", "after lunch")).unwrap();
    assert_eq!(added.time, "after lunch");
}

#[test]
fn non_calendar_date_is_kept_by_default() {
    let reg = registry();
    let added = reg.add_exam(req("STOCKS", "2024-02-31", "09:00")).unwrap();
    assert_eq!(reg.list_exams().unwrap()[0].date, "2024-02-31");
    assert_eq!(added.date, "2024-02-31");
}

#[test]
fn strict_dates_reject_non_calendar_date() {
    let reg = registry().with_strict_dates(true);
    let err = reg.add_exam(req("STOCKS", "2025-04-31", "09:00")).unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert!(reg.list_exams().unwrap().is_empty());

    reg.add_exam(req("STOCKS", "2024-02-29", "09:00")).unwrap();
    assert_eq!(reg.list_exams().unwrap().len(), 1);
}

// ══════════════════════════════════════════════════════════
//  delete_exam
// ══════════════════════════════════════════════════════════

#[test]
fn delete_exam_removes_only_that_record() {
    let reg = registry();
    let a = reg.add_exam(req("JAVA", "2024-03-07", "09:30")).unwrap();
    let b = reg.add_exam(req("PYTHON", "2024-03-08", "10:30")).unwrap();
    let c = reg.add_exam(req("COST", "2024-03-09", "11:30")).unwrap();

    let outcome = reg.delete_exam(Some(b.id)).unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(reg.list_exams().unwrap(), vec![a, c]);
}

#[test]
fn delete_exam_twice_is_a_noop() {
    let reg = registry();
    let a = reg.add_exam(req("JAVA", "2024-03-07", "09:30")).unwrap();
    reg.delete_exam(Some(a.id)).unwrap();
    let again = reg.delete_exam(Some(a.id)).unwrap();
    assert_eq!(again, DeleteOutcome::AlreadyGone);
    assert!(reg.list_exams().unwrap().is_empty());
}

#[test]
fn delete_exam_without_selection_fails() {
    let reg = registry();
    reg.add_exam(req("JAVA", "2024-03-07", "09:30")).unwrap();
    let err = reg.delete_exam(None).unwrap_err();
    assert!(matches!(err, AppError::Selection(_)));
    assert_eq!(err.code(), "SELECTION_ERROR");
    assert_eq!(reg.list_exams().unwrap().len(), 1);
}

// ══════════════════════════════════════════════════════════
//  list_subjects / subject_choices / snapshot
// ══════════════════════════════════════════════════════════

#[test]
fn list_subjects_is_distinct_in_first_seen_order() {
    let reg = registry();
    reg.add_exam(req("PYTHON", "2024-03-07", "09:30")).unwrap();
    reg.add_exam(req("JAVA", "2024-03-08", "09:30")).unwrap();
    reg.add_exam(req("COST", "2024-03-09", "09:30")).unwrap();
    reg.add_exam(req("PYTHON", "2024-03-10", "09:30")).unwrap();

    assert_eq!(reg.list_subjects().unwrap(), vec!["PYTHON", "JAVA", "COST"]);
}

#[test]
fn subject_choices_keep_seed_list_and_append_new_subjects() {
    let reg = registry();
    assert_eq!(reg.subject_choices().unwrap(), SEED_SUBJECTS);

    reg.add_exam(req("JAVA", "2024-03-07", "09:30")).unwrap();
    reg.add_exam(req("DATA MINING", "2024-03-08", "09:30")).unwrap();

    let choices = reg.subject_choices().unwrap();
    assert_eq!(&choices[..SEED_SUBJECTS.len()], SEED_SUBJECTS);
    assert_eq!(choices.len(), SEED_SUBJECTS.len() + 1);
    assert_eq!(choices.last().unwrap(), "DATA MINING");
}

#[test]
fn snapshot_reflects_insert_and_new_subject() {
    let reg = registry();
    let empty = reg.snapshot().unwrap();
    assert!(empty.subjects.is_empty());
    assert!(empty.exams.is_empty());

    reg.add_exam(req("COMPUTER GRAPHICS", "2024-05-01", "13:00"))
        .unwrap();
    let view = reg.snapshot().unwrap();
    assert_eq!(view.subjects, vec!["COMPUTER GRAPHICS"]);
    assert_eq!(view.exams.len(), 1);
}

#[test]
fn list_exams_is_ordered_by_id() {
    let reg = registry();
    for day in 1..=5 {
        reg.add_exam(req("JAVA", &format!("2024-03-{:02}", day), "09:00"))
            .unwrap();
    }
    let ids: Vec<i64> = reg.list_exams().unwrap().iter().map(|e| e.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}
