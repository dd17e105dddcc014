//! Interactive shopping list CLI.
//!
//! # Responsibility
//! - Parse process flags and bring up file logging.
//! - Run one in-memory shell session over stdin/stdout.

mod locale;
mod shell;

use clap::Parser;
use locale::Locale;
use log::error;
use shell::Shell;
use shoplist_core::{default_log_level, init_logging, LogConfig};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_LOG_DIR_NAME: &str = "shoplist-logs";

/// Manage a shopping list from the terminal. The list lives only for the
/// duration of the session.
#[derive(Debug, Parser)]
#[command(name = "shoplist", version)]
struct Cli {
    /// Language for prompts and messages.
    #[arg(long, value_enum, default_value_t = Locale::En)]
    lang: Locale,

    /// trace|debug|info|warn|error. Defaults to debug in debug builds.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Do not write log files.
    #[arg(long)]
    no_log: bool,
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        LogConfig::new(
            self.log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            self.log_dir
                .clone()
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.no_log {
        // Logging is diagnostic only; the session still runs without it.
        if let Err(err) = init_logging(&cli.log_config()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), cli.lang);
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=shell_exit module=shell status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, DEFAULT_LOG_DIR_NAME};
    use crate::locale::Locale;
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_english_and_temp_log_dir() {
        let cli = Cli::parse_from(["shoplist"]);
        assert_eq!(cli.lang, Locale::En);
        assert!(!cli.no_log);

        let config = cli.log_config();
        assert!(config.log_dir.ends_with(DEFAULT_LOG_DIR_NAME));
        assert!(config.log_dir.is_absolute());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "shoplist",
            "--lang",
            "pt",
            "--log-level",
            "warn",
            "--log-dir",
            "/var/tmp/shoplist",
        ]);
        assert_eq!(cli.lang, Locale::Pt);

        let config = cli.log_config();
        assert_eq!(config.level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/tmp/shoplist"));
    }
}
