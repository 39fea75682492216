//! Exam repository: the four statements the registry issues.

use crate::domain::{ExamRecord, NewExam};
use crate::error::AppError;
use crate::infra::db::Database;
use rusqlite::params;

/// Storage seam for the exam registry.
pub trait ExamStore {
    /// Distinct subjects in the order the store returns them.
    fn distinct_subjects(&self) -> Result<Vec<String>, AppError>;

    fn all_exams(&self) -> Result<Vec<ExamRecord>, AppError>;

    /// Insert and return the store-assigned id.
    fn insert_exam(&self, exam: &NewExam) -> Result<i64, AppError>;

    /// Returns the number of rows removed (0 or 1).
    fn delete_exam(&self, id: i64) -> Result<usize, AppError>;
}

pub struct SqliteExamStore {
    db: Database,
}

impl SqliteExamStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ExamStore for SqliteExamStore {
    fn distinct_subjects(&self) -> Result<Vec<String>, AppError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare("SELECT DISTINCT subject FROM exams")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn all_exams(&self) -> Result<Vec<ExamRecord>, AppError> {
        let conn = self.db.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, subject, exam_date, exam_time FROM exams ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(ExamRecord {
                id: row.get(0)?,
                subject: row.get(1)?,
                date: row.get(2)?,
                time: row.get(3)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn insert_exam(&self, exam: &NewExam) -> Result<i64, AppError> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO exams (subject, exam_date, exam_time) VALUES (?1, ?2, ?3)",
            params![exam.subject, exam.date, exam.time],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn delete_exam(&self, id: i64) -> Result<usize, AppError> {
        let conn = self.db.connect()?;
        let rows = conn.execute("DELETE FROM exams WHERE id = ?1", params![id])?;
        Ok(rows)
    }
}
