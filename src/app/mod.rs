//! Application use cases.

mod exam;
mod export;

pub use exam::{DeleteOutcome, ExamCreateReq, ExamRegistry, ExamView};
pub use export::{export_json_string, ExportRoot, EXPORT_SCHEMA_VERSION};
