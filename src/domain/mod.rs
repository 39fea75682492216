//! Domain types: exam records and selector bounds.

pub mod exam;

pub use exam::{
    is_calendar_date_str, ExamDate, ExamRecord, NewExam, DAY_RANGE, MONTH_RANGE, SEED_SUBJECTS,
    YEAR_RANGE,
};
