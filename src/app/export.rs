//! Export use case: all exams as JSON.

use crate::app::ExamRegistry;
use crate::domain::ExamRecord;
use crate::error::AppError;
use crate::infra::ExamStore;
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const EXPORT_SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRoot {
    pub schema_version: i32,
    pub exported_at: String,
    pub exams: Vec<ExamRecord>,
}

/// Export all exams as a pretty-printed JSON string
pub fn export_json_string<S: ExamStore>(registry: &ExamRegistry<S>) -> Result<String, AppError> {
    let root = ExportRoot {
        schema_version: EXPORT_SCHEMA_VERSION,
        exported_at: Utc::now().to_rfc3339(),
        exams: registry.list_exams()?,
    };
    log::info!("Exporting {} exams", root.exams.len());
    serde_json::to_string_pretty(&root).map_err(|e| AppError::Io(e.to_string()))
}
