//! Interactive admin panel: entry form, grid view and row selection.

use super::resolve_subject;
use super::table::{delete_notice, error_notice, render_exam_table};
use crate::app::{export_json_string, ExamCreateReq, ExamRegistry, ExamView};
use crate::domain::{ExamDate, DAY_RANGE, MONTH_RANGE, YEAR_RANGE};
use crate::error::AppError;
use crate::infra::ExamStore;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;

const HELP: &str = "\
Commands:
  list              show all exams
  subjects          show the subjects offered when adding
  add               add an exam (subject, date, time)
  select <id>       select an exam in the list
  delete [<id>]     delete the selected exam (or select <id> first)
  export [<file>]   print all exams as JSON, or write them to <file>
  help              show this help
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Subjects,
    Add,
    Select(i64),
    Delete(Option<i64>),
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(AppError::Validation(format!("Too many arguments: {}", line)));
        }
        let parse_id = |raw: &str| {
            raw.parse::<i64>()
                .map_err(|_| AppError::Selection(format!("Invalid exam id: {}", raw)))
        };
        match (name.as_str(), arg) {
            ("list" | "ls", None) => Ok(Self::List),
            ("subjects", None) => Ok(Self::Subjects),
            ("add", None) => Ok(Self::Add),
            ("select", Some(raw)) => Ok(Self::Select(parse_id(raw)?)),
            ("select", None) => Err(AppError::Selection("Usage: select <id>".into())),
            ("delete" | "rm", raw) => Ok(Self::Delete(raw.map(parse_id).transpose()?)),
            ("export", file) => Ok(Self::Export(file.map(PathBuf::from))),
            ("help" | "?", None) => Ok(Self::Help),
            ("quit" | "exit" | "q", None) => Ok(Self::Quit),
            _ => Err(AppError::Validation(format!(
                "Unknown command: {} (type 'help')",
                line.trim()
            ))),
        }
    }
}

pub struct Console<S: ExamStore, R: BufRead, W: Write> {
    registry: ExamRegistry<S>,
    input: R,
    output: W,
    view: ExamView,
    selected: Option<i64>,
}

impl<S: ExamStore, R: BufRead, W: Write> Console<S, R, W> {
    pub fn new(registry: ExamRegistry<S>, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            view: ExamView {
                subjects: Vec::new(),
                exams: Vec::new(),
            },
            selected: None,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "Exam Scheduler - Admin Panel")?;
        writeln!(self.output, "Type 'help' for commands.")?;
        self.report(|c| c.refresh_and_show())?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };
            if line.is_empty() {
                continue;
            }
            let command = match line.parse::<ConsoleCommand>() {
                Ok(c) => c,
                Err(e) => {
                    writeln!(self.output, "{}", error_notice(&e))?;
                    continue;
                }
            };
            if command == ConsoleCommand::Quit {
                break;
            }
            self.report(|c| c.execute(command))?;
        }
        log::info!("Console closed");
        Ok(())
    }

    /// Show an operation error as a notice. Only output failures escape.
    fn report<F>(&mut self, op: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Self) -> Result<(), AppError>,
    {
        match op(self) {
            Err(AppError::Io(msg)) => Err(AppError::Io(msg)),
            Err(e) => {
                writeln!(self.output, "{}", error_notice(&e))?;
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    pub fn execute(&mut self, command: ConsoleCommand) -> Result<(), AppError> {
        match command {
            ConsoleCommand::List => self.refresh_and_show(),
            ConsoleCommand::Subjects => {
                for (i, subject) in self.registry.subject_choices()?.iter().enumerate() {
                    writeln!(self.output, "{:>2}. {}", i + 1, subject)?;
                }
                Ok(())
            }
            ConsoleCommand::Add => self.add(),
            ConsoleCommand::Select(id) => self.select(id),
            ConsoleCommand::Delete(id) => {
                if let Some(id) = id {
                    self.select(id)?;
                }
                self.delete_selected()
            }
            ConsoleCommand::Export(path) => self.export(path),
            ConsoleCommand::Help => {
                writeln!(self.output, "{}", HELP)?;
                Ok(())
            }
            ConsoleCommand::Quit => Ok(()),
        }
    }

    fn refresh(&mut self) -> Result<(), AppError> {
        self.view = self.registry.snapshot()?;
        if let Some(id) = self.selected {
            if !self.view.exams.iter().any(|e| e.id == id) {
                self.selected = None;
            }
        }
        Ok(())
    }

    fn refresh_and_show(&mut self) -> Result<(), AppError> {
        self.refresh()?;
        write!(self.output, "{}", render_exam_table(&self.view.exams))?;
        Ok(())
    }

    fn select(&mut self, id: i64) -> Result<(), AppError> {
        if !self.view.exams.iter().any(|e| e.id == id) {
            return Err(AppError::Selection(format!(
                "No exam with id {} in the list.",
                id
            )));
        }
        self.selected = Some(id);
        writeln!(self.output, "Selected exam {}.", id)?;
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<(), AppError> {
        let selected = self.selected;
        let outcome = self.registry.delete_exam(selected)?;
        if let Some(id) = selected {
            writeln!(self.output, "{}", delete_notice(id, outcome))?;
        }
        self.selected = None;
        self.refresh_and_show()
    }

    fn add(&mut self) -> Result<(), AppError> {
        let Some(req) = self.read_form()? else {
            writeln!(self.output, "Add cancelled.")?;
            return Ok(());
        };
        self.registry.add_exam(req)?;
        writeln!(self.output, "Success: Exam added successfully.")?;
        self.refresh_and_show()
    }

    fn read_form(&mut self) -> Result<Option<ExamCreateReq>, AppError> {
        let choices = self.registry.subject_choices()?;
        writeln!(self.output, "Subjects:")?;
        for (i, subject) in choices.iter().enumerate() {
            writeln!(self.output, "{:>2}. {}", i + 1, subject)?;
        }

        let subject = loop {
            write!(self.output, "Subject [1-{} or name]: ", choices.len())?;
            self.output.flush()?;
            let Some(raw) = self.read_line()? else {
                return Ok(None);
            };
            if raw.is_empty() {
                break None;
            }
            match resolve_subject(&choices, &raw) {
                Some(s) => break Some(s),
                None => writeln!(self.output, "Choose a listed subject.")?,
            }
        };

        let Some(day) = self.read_bounded("Day", DAY_RANGE)? else {
            return Ok(None);
        };
        let Some(month) = self.read_bounded("Month", MONTH_RANGE)? else {
            return Ok(None);
        };
        let Some(year) = self.read_bounded("Year", YEAR_RANGE)? else {
            return Ok(None);
        };

        write!(self.output, "Time (HH:MM): ")?;
        self.output.flush()?;
        let Some(time) = self.read_line()? else {
            return Ok(None);
        };

        let date = ExamDate::compose(day, month, year)?;
        Ok(Some(ExamCreateReq {
            subject,
            date: date.to_string(),
            time,
        }))
    }

    /// Re-prompt until the value is in range. Empty input picks the first value.
    fn read_bounded<T>(&mut self, label: &str, range: RangeInclusive<T>) -> Result<Option<T>, AppError>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            write!(
                self.output,
                "{} ({}-{}) [{}]: ",
                label,
                range.start(),
                range.end(),
                range.start()
            )?;
            self.output.flush()?;
            let Some(raw) = self.read_line()? else {
                return Ok(None);
            };
            if raw.is_empty() {
                return Ok(Some(*range.start()));
            }
            match raw.parse::<T>() {
                Ok(v) if range.contains(&v) => return Ok(Some(v)),
                _ => writeln!(
                    self.output,
                    "{} must be between {} and {}.",
                    label,
                    range.start(),
                    range.end()
                )?,
            }
        }
    }

    fn export(&mut self, path: Option<PathBuf>) -> Result<(), AppError> {
        let json = export_json_string(&self.registry)?;
        match path {
            Some(path) => match std::fs::write(&path, json) {
                Ok(()) => writeln!(self.output, "Exported exams to {}.", path.display())?,
                Err(e) => {
                    log::error!("Export to {} failed: {}", path.display(), e);
                    writeln!(self.output, "Error: Cannot write {}: {}", path.display(), e)?;
                }
            },
            None => writeln!(self.output, "{}", json)?,
        }
        Ok(())
    }

    /// Undecodable bytes become U+FFFD so a bad line is just an unknown command.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
