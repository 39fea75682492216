//! SQLite connection target and migrations.
//!
//! No connection is kept for operations: every call to [`Database::connect`]
//! opens a fresh one, and it closes when the caller drops it.

use crate::error::AppError;
use crate::infra::exam_store::SqliteExamStore;
use rusqlite::Connection;
use std::path::Path;

const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

pub struct Database {
    target: String,
    // In-memory shared-cache databases vanish when their last connection
    // closes. This one is never handed out.
    _keepalive: Option<Connection>,
}

impl Database {
    /// Point at a database file or SQLite URI. Does no I/O.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            _keepalive: None,
        }
    }

    /// Private in-memory database, migrated and ready.
    pub fn in_memory() -> Result<Self, AppError> {
        let target = format!(
            "file:exams-{}?mode=memory&cache=shared",
            uuid::Uuid::new_v4().simple()
        );
        let keepalive = Connection::open(&target)?;
        let db = Self {
            target,
            _keepalive: Some(keepalive),
        };
        db.run_migrations()?;
        Ok(db)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn connect(&self) -> Result<Connection, AppError> {
        Connection::open(&self.target).map_err(|e| {
            log::error!("Database connection to {} failed: {}", self.target, e);
            AppError::Storage(e.to_string())
        })
    }

    pub fn run_migrations(&self) -> Result<(), AppError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
            [],
        )?;

        let applied: Vec<i32> = tx
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?
            .query_map([], |r| r.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        for (version, sql) in MIGRATIONS {
            if applied.contains(version) {
                continue;
            }
            // The script's own bookkeeping INSERT is replaced by ours below
            let statements = sql
                .split(';')
                .map(strip_comments)
                .filter(|s| !s.is_empty() && !s.contains("INSERT INTO schema_migrations"));
            for stmt in statements {
                tx.execute(&stmt, [])?;
            }
            tx.execute(
                "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
                [version],
            )?;
            log::info!("Applied migration {}", version);
        }

        tx.commit()?;
        Ok(())
    }
}

fn strip_comments(chunk: &str) -> String {
    chunk
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Initialize DB at path, creating parent directories and running migrations.
pub fn init_db(db_path: &Path) -> Result<Database, AppError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let db = Database::new(db_path.to_string_lossy().into_owned());
    db.run_migrations()?;
    Ok(db)
}

/// Fresh in-memory store. Test helper only; panics if SQLite cannot open memory.
#[doc(hidden)]
pub fn init_test_db() -> SqliteExamStore {
    let db = Database::in_memory().expect("in-memory test database");
    SqliteExamStore::new(db)
}
