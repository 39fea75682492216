//! Exam record, date composition and the known-subjects seed list.

use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Subjects offered by the selector before anything has been stored.
pub const SEED_SUBJECTS: &[&str] = &[
    "EMBEDDED SYSTEM",
    "SOFTWARE ENGINEERING",
    "COMPUTER GRAPHICS",
    "PYTHON",
    "JAVA",
    "HINDI",
    "STOCKS",
    "COST",
];

pub const DAY_RANGE: RangeInclusive<u32> = 1..=31;
pub const MONTH_RANGE: RangeInclusive<u32> = 1..=12;
pub const YEAR_RANGE: RangeInclusive<i32> = 2020..=2030;

/// A stored exam. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    pub id: i64,
    pub subject: String,
    pub date: String,
    pub time: String,
}

/// Validated field values for an insert; built by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExam {
    pub subject: String,
    pub date: String,
    pub time: String,
}

impl NewExam {
    pub fn into_record(self, id: i64) -> ExamRecord {
        ExamRecord {
            id,
            subject: self.subject,
            date: self.date,
            time: self.time,
        }
    }
}

/// Date built from the day/month/year selectors.
///
/// Each part is bounded on its own, so `2024-02-31` is representable.
/// Use [`ExamDate::is_calendar_date`] to tell whether it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamDate {
    year: i32,
    month: u32,
    day: u32,
}

impl ExamDate {
    pub fn compose(day: u32, month: u32, year: i32) -> Result<Self, AppError> {
        if !DAY_RANGE.contains(&day) {
            return Err(AppError::Validation(format!(
                "day must be between {} and {}",
                DAY_RANGE.start(),
                DAY_RANGE.end()
            )));
        }
        if !MONTH_RANGE.contains(&month) {
            return Err(AppError::Validation(format!(
                "month must be between {} and {}",
                MONTH_RANGE.start(),
                MONTH_RANGE.end()
            )));
        }
        if !YEAR_RANGE.contains(&year) {
            return Err(AppError::Validation(format!(
                "year must be between {} and {}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn is_calendar_date(&self) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_some()
    }
}

impl fmt::Display for ExamDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// True if `date` is a `YYYY-MM-DD` string naming a real day.
pub fn is_calendar_date_str(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
