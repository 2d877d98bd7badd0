//! Terminal entry point for the task list.
//!
//! # Responsibility
//! - Parse configuration, start logging, open local storage.
//! - Hand stdin/stdout to the line surface.

mod config;
mod surface;

use clap::Parser;
use config::CliConfig;
use log::{info, warn};
use std::io;
use std::process::ExitCode;
use todo_core::db::{open_db, open_db_in_memory};
use todo_core::{default_log_level, init_logging, SqliteLocalStorage, SystemClock, TodoSession};

fn main() -> ExitCode {
    let config = CliConfig::parse();

    if let Some(log_dir) = &config.log_dir {
        let level = config
            .log_level
            .as_deref()
            .unwrap_or(default_log_level());
        let log_dir = std::path::absolute(log_dir).unwrap_or_else(|_| log_dir.clone());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = if config.memory {
        open_db_in_memory()
    } else {
        open_db(&config.db)
    };
    let conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open {}: {err}", config.storage_label());
            return ExitCode::FAILURE;
        }
    };

    let storage = SqliteLocalStorage::new(&conn);
    let mut session = TodoSession::open_with(storage, &config.storage_key, SystemClock);
    info!(
        "event=session_open module=cli status=ok tasks={} key={}",
        session.tasks().len(),
        config.storage_key
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = surface::run(&mut session, stdin.lock(), &mut stdout) {
        warn!("event=surface_exit module=cli status=error error={err}");
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
