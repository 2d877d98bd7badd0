//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;
use todo_core::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo", version, about = "Terminal surface for the task list")]
pub struct CliConfig {
    /// SQLite file holding the local key-value store.
    #[arg(long, default_value = "todos.sqlite3")]
    pub db: PathBuf,

    /// Keep state in memory only; nothing survives exit.
    #[arg(long, conflicts_with = "db")]
    pub memory: bool,

    /// Directory for rolling log files. Logging is off when omitted.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long)]
    pub log_level: Option<String>,

    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    pub storage_key: String,
}

impl CliConfig {
    /// Human-readable name of the storage this run opens.
    pub fn storage_label(&self) -> String {
        if self.memory {
            "in-memory storage".to_string()
        } else {
            format!("`{}`", self.db.display())
        }
    }
}
