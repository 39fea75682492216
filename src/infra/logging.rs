//! Diagnostic trace backend for the `log` facade.

use crate::error::AppError;
use env_logger::{Builder, Env, Target, WriteStyle};
use std::fs::OpenOptions;
use std::path::Path;

/// Initialize logging. `RUST_LOG` overrides `level` when set.
///
/// With `log_file` the trace is appended there instead of stderr, so it does
/// not interleave with the console.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<(), AppError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level));
    builder
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Auto);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder
            .write_style(WriteStyle::Never)
            .target(Target::Pipe(Box::new(file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| AppError::Config(format!("logger: {}", e)))?;

    log::info!("Logging initialized (level={})", level);
    Ok(())
}
