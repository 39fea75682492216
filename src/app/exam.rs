//! Exam registry use cases: list, add, delete.

use crate::domain::{is_calendar_date_str, ExamRecord, NewExam, SEED_SUBJECTS};
use crate::error::AppError;
use crate::infra::ExamStore;
use serde::Serialize;
use std::collections::HashSet;

/// Raw field values from the entry form.
#[derive(Debug, Clone, Default)]
pub struct ExamCreateReq {
    pub subject: Option<String>,
    pub date: String,
    pub time: String,
}

/// What a full re-list shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamView {
    pub subjects: Vec<String>,
    pub exams: Vec<ExamRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The id had already gone; nothing changed.
    AlreadyGone,
}

pub struct ExamRegistry<S: ExamStore> {
    store: S,
    strict_dates: bool,
}

impl<S: ExamStore> ExamRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            strict_dates: false,
        }
    }

    pub fn with_strict_dates(mut self, strict: bool) -> Self {
        self.strict_dates = strict;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Distinct stored subjects, first-seen order.
    pub fn list_subjects(&self) -> Result<Vec<String>, AppError> {
        let raw = self.store.distinct_subjects().map_err(|e| {
            log::error!("Error fetching subjects: {}", e);
            e
        })?;
        let mut seen = HashSet::new();
        Ok(raw.into_iter().filter(|s| seen.insert(s.clone())).collect())
    }

    /// All records, ascending id.
    pub fn list_exams(&self) -> Result<Vec<ExamRecord>, AppError> {
        let mut exams = self.store.all_exams().map_err(|e| {
            log::error!("Error fetching exams: {}", e);
            e
        })?;
        exams.sort_by_key(|e| e.id);
        Ok(exams)
    }

    /// Seed subjects first, then stored subjects not already offered.
    pub fn subject_choices(&self) -> Result<Vec<String>, AppError> {
        let mut choices: Vec<String> = SEED_SUBJECTS.iter().map(|s| s.to_string()).collect();
        for subject in self.list_subjects()? {
            if !choices.contains(&subject) {
                choices.push(subject);
            }
        }
        Ok(choices)
    }

    pub fn snapshot(&self) -> Result<ExamView, AppError> {
        Ok(ExamView {
            subjects: self.list_subjects()?,
            exams: self.list_exams()?,
        })
    }

    pub fn add_exam(&self, req: ExamCreateReq) -> Result<ExamRecord, AppError> {
        let exam = self.validate(req)?;
        let id = self.store.insert_exam(&exam).map_err(|e| {
            log::error!("Insert of {} on {} failed: {}", exam.subject, exam.date, e);
            e
        })?;
        log::info!(
            "Exam added: id={}, subject={}, date={}, time={}",
            id,
            exam.subject,
            exam.date,
            exam.time
        );
        Ok(exam.into_record(id))
    }

    /// Delete the selected record. `None` means nothing is selected.
    pub fn delete_exam(&self, selected: Option<i64>) -> Result<DeleteOutcome, AppError> {
        let id = selected.ok_or_else(|| {
            AppError::Selection("Please select an exam to delete.".into())
        })?;
        let rows = self.store.delete_exam(id).map_err(|e| {
            log::error!("Delete of exam {} failed: {}", id, e);
            e
        })?;
        if rows == 0 {
            log::warn!("Delete of exam {} affected no rows", id);
            Ok(DeleteOutcome::AlreadyGone)
        } else {
            log::info!("Exam deleted: id={}", id);
            Ok(DeleteOutcome::Deleted)
        }
    }

    fn validate(&self, req: ExamCreateReq) -> Result<NewExam, AppError> {
        let subject = req
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("Please fill all fields.".into()))?
            .to_string();
        let date = req.date.trim();
        let time = req.time.trim();
        if date.is_empty() || time.is_empty() {
            return Err(AppError::Validation("Please fill all fields.".into()));
        }
        if !is_calendar_date_str(date) {
            if self.strict_dates {
                return Err(AppError::Validation(format!(
                    "{} is not a valid calendar date",
                    date
                )));
            }
            log::warn!("Storing non-calendar date {}", date);
        }
        Ok(NewExam {
            subject,
            date: date.to_string(),
            time: time.to_string(),
        })
    }
}
