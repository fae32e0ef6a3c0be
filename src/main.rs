//! Botdeck - terminal chat dashboard with mocked model replies

use anyhow::Result;
use botdeck::App;
use botdeck::config::Config;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Terminal chat dashboard with mocked model replies
#[derive(Parser)]
#[command(name = "botdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the simulated reply delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> Result<()> {
    let log_path = botdeck::paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to the temp dir - tail with: tail -f "$TMPDIR/botdeck.log"
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "botdeck.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config, using defaults: {e}");
            Config::default()
        }),
    };

    if let Some(delay_ms) = cli.delay_ms {
        config.reply_delay_ms = delay_ms;
    }

    let app = App::new(config);
    botdeck::tui::run(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["botdeck"]);
        assert!(cli.config.is_none());
        assert!(cli.delay_ms.is_none());
    }

    #[test]
    fn test_cli_delay_override() {
        let cli = Cli::parse_from(["botdeck", "--delay-ms", "250"]);
        assert_eq!(cli.delay_ms, Some(250));
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::parse_from(["botdeck", "--config", "/tmp/custom.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/custom.json")));
    }
}
