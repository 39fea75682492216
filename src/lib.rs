pub mod app;
pub mod auth;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;

use app::ExamRegistry;
use auth::{login, FixedCredential};
use commands::cli::{build_cli, overrides_from_matches, run_subcommand};
use commands::console::Console;
use commands::login::prompt_credentials;
use commands::table::error_notice;
use config::AppConfig;
use infra::{init_db, init_logging, Database, SqliteExamStore};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn open_store(cfg: &AppConfig) -> SqliteExamStore {
    let db_path = cfg.database_path();
    log::info!("DB path: {:?}", db_path);
    let db = init_db(db_path).unwrap_or_else(|e| {
        // Keep going: every operation will report the storage error itself
        log::error!("DB init failed: {}", e);
        eprintln!("{}", error_notice(&e));
        Database::new(cfg.database_path.clone())
    });
    SqliteExamStore::new(db)
}

pub fn run() -> ExitCode {
    let matches = build_cli().get_matches();

    let cfg = match AppConfig::load(&overrides_from_matches(&matches)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", error_notice(&e));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&cfg.log_level, cfg.log_file.as_deref()) {
        eprintln!("Warning: {}", e.detail());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let masked = io::stdin().is_terminal();

    let attempt = match prompt_credentials(&mut input, &mut output, masked) {
        Ok(attempt) => attempt,
        Err(e) => {
            log::error!("Login prompt failed: {}", e);
            None
        }
    };
    let verifier = FixedCredential::default();
    let outcome = login(
        &verifier,
        attempt.as_ref().map(|(u, p)| (u.as_str(), p.as_str())),
    );
    if !outcome.is_granted() {
        println!("Login failed. Exiting application.");
        return ExitCode::SUCCESS;
    }

    let registry = ExamRegistry::new(open_store(&cfg)).with_strict_dates(cfg.strict_dates);

    let result = match matches.subcommand() {
        Some((name, sub)) => run_subcommand(&registry, name, sub, &mut output),
        None => Console::new(registry, input, output).run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_notice(&e));
            ExitCode::FAILURE
        }
    }
}
