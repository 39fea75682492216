//! Infrastructure: SQLite connections, migrations, repositories, logging.

pub mod db;
pub mod exam_store;
pub mod logging;

pub use db::{init_db, init_test_db, Database};
pub use logging::init_logging;
pub use exam_store::{ExamStore, SqliteExamStore};
