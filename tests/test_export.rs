//! Export JSON integration tests

use app_lib::app::{export_json_string, ExamCreateReq, ExamRegistry, ExportRoot};
use app_lib::infra::db::init_test_db;

// ══════════════════════════════════════════════════════════
//  export_json_string
// ══════════════════════════════════════════════════════════

#[test]
fn export_empty_db_returns_valid_json() {
    let registry = ExamRegistry::new(init_test_db());
    let json_str = export_json_string(&registry).unwrap();
    let json: serde_json::Value = serde_json::from_str(&json_str).unwrap();

    assert_eq!(json["schemaVersion"], 1);
    assert!(!json["exportedAt"].as_str().unwrap().is_empty());
    assert_eq!(json["exams"].as_array().unwrap().len(), 0);
}

#[test]
fn export_with_data_contains_every_exam_in_id_order() {
    let registry = ExamRegistry::new(init_test_db());
    for (subject, date) in [("JAVA", "2024-03-07"), ("PYTHON", "2024-03-08"), ("HINDI", "2024-02-31")] {
        registry
            .add_exam(ExamCreateReq {
                subject: Some(subject.to_string()),
                date: date.to_string(),
                time: "09:30".to_string(),
            })
            .unwrap();
    }

    let json_str = export_json_string(&registry).unwrap();
    let root: ExportRoot = serde_json::from_str(&json_str).unwrap();

    assert_eq!(root.exams, registry.list_exams().unwrap());
    assert_eq!(root.exams[0].subject, "JAVA");
    assert_eq!(root.exams[2].date, "2024-02-31");
    assert!(root.exams.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn export_uses_camel_case_keys() {
    let registry = ExamRegistry::new(init_test_db());
    registry
        .add_exam(ExamCreateReq {
            subject: Some("COST".to_string()),
            date: "2024-03-07".to_string(),
            time: "16:45".to_string(),
        })
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&export_json_string(&registry).unwrap()).unwrap();
    let exam = &json["exams"][0];
    assert_eq!(exam["id"], 1);
    assert_eq!(exam["subject"], "COST");
    assert_eq!(exam["date"], "2024-03-07");
    assert_eq!(exam["time"], "16:45");
}
