//! Plain-text rendering of the exam grid and operator notices.

use crate::app::DeleteOutcome;
use crate::domain::ExamRecord;
use crate::error::AppError;

const HEADERS: [&str; 4] = ["ID", "Subject", "Date", "Time"];

pub fn render_exam_table(exams: &[ExamRecord]) -> String {
    let rows: Vec<[String; 4]> = exams
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.subject.clone(),
                e.date.clone(),
                e.time.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    if rows.is_empty() {
        out.push_str("No exams scheduled.\n");
    }
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{}\n", line.trim_end())
}

pub fn error_notice(err: &AppError) -> String {
    format!("{}: {}", err.notice_title(), err.detail())
}

pub fn delete_notice(id: i64, outcome: DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted => "Success: Exam deleted successfully.".to_string(),
        DeleteOutcome::AlreadyGone => format!("Exam {} was already deleted.", id),
    }
}
