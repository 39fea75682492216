//! Command-line definition and one-shot subcommands.

use super::resolve_subject;
use super::table::{delete_notice, render_exam_table};
use crate::app::{export_json_string, ExamCreateReq, ExamRegistry};
use crate::config::CliOverrides;
use crate::domain::ExamDate;
use crate::error::AppError;
use crate::infra::ExamStore;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::io::Write;
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("exam-scheduler")
        .about("Exam Scheduler - Admin Panel")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file (toml, json, yaml, ini)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("database")
                .long("database")
                .value_name("PATH")
                .help("SQLite database file or URI"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log filter, e.g. info or app_lib=debug"),
        )
        .subcommand(Command::new("list").about("List all exams"))
        .subcommand(Command::new("subjects").about("List the subjects offered when adding"))
        .subcommand(
            Command::new("add")
                .about("Add an exam")
                .arg(
                    Arg::new("subject")
                        .long("subject")
                        .help("Subject name or its number in 'subjects'")
                        .required(true),
                )
                .arg(
                    Arg::new("day")
                        .long("day")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .required(true)
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("time")
                        .long("time")
                        .help("Time of day, HH:MM")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("delete").about("Delete an exam by id").arg(
                Arg::new("id")
                    .long("id")
                    .required(true)
                    .value_parser(value_parser!(i64)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export all exams as JSON").arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf)),
            ),
        )
}

pub fn overrides_from_matches(matches: &ArgMatches) -> CliOverrides {
    CliOverrides {
        config_file: matches.get_one::<PathBuf>("config").cloned(),
        database_path: matches.get_one::<String>("database").cloned(),
        log_level: matches.get_one::<String>("log-level").cloned(),
    }
}

fn required<T: Clone + Send + Sync + 'static>(m: &ArgMatches, name: &str) -> Result<T, AppError> {
    m.get_one::<T>(name)
        .cloned()
        .ok_or_else(|| AppError::Validation(format!("--{} is required", name)))
}

/// Run one subcommand against the registry.
pub fn run_subcommand<S: ExamStore, W: Write>(
    registry: &ExamRegistry<S>,
    name: &str,
    m: &ArgMatches,
    out: &mut W,
) -> Result<(), AppError> {
    match name {
        "list" => {
            write!(out, "{}", render_exam_table(&registry.list_exams()?))?;
        }
        "subjects" => {
            for (i, subject) in registry.subject_choices()?.iter().enumerate() {
                writeln!(out, "{:>2}. {}", i + 1, subject)?;
            }
        }
        "add" => {
            let raw_subject: String = required(m, "subject")?;
            let choices = registry.subject_choices()?;
            let subject = resolve_subject(&choices, &raw_subject).ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown subject '{}'; run 'subjects' to see the choices",
                    raw_subject
                ))
            })?;
            let date = ExamDate::compose(
                required(m, "day")?,
                required(m, "month")?,
                required(m, "year")?,
            )?;
            let exam = registry.add_exam(ExamCreateReq {
                subject: Some(subject),
                date: date.to_string(),
                time: required(m, "time")?,
            })?;
            writeln!(out, "Success: Exam added successfully (id {}).", exam.id)?;
        }
        "delete" => {
            let id: i64 = required(m, "id")?;
            let outcome = registry.delete_exam(Some(id))?;
            writeln!(out, "{}", delete_notice(id, outcome))?;
        }
        "export" => {
            let json = export_json_string(registry)?;
            match m.get_one::<PathBuf>("output") {
                Some(path) => {
                    std::fs::write(path, json)?;
                    writeln!(out, "Exported exams to {}.", path.display())?;
                }
                None => writeln!(out, "{}", json)?,
            }
        }
        other => {
            return Err(AppError::Validation(format!("Unknown command: {}", other)));
        }
    }
    Ok(())
}
