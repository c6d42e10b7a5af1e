use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use tic_tac_toe::config::{AppConfig, LoggingConfig};
use tic_tac_toe::ui::App;

/// Play Tic-Tac-Toe in the terminal.
#[derive(Parser)]
#[command(name = "tic-tac-toe", about = "Play Tic-Tac-Toe against a friend or the AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tic_tac_toe.toml")]
    config: PathBuf,

    /// Override the result log path
    #[arg(long)]
    results: Option<PathBuf>,

    /// Override the log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(results) = cli.results {
        config.results.path = results;
    }
    if let Some(log_file) = cli.log_file {
        config.logging.file = log_file;
    }
    config.validate().context("validating config")?;

    let _guard = init_logging(&config.logging)?;
    info!(results = %config.results.path.display(), "starting tic-tac-toe");

    run(&config).context("running terminal UI")
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let level: tracing::Level = config
        .level
        .parse()
        .with_context(|| format!("invalid log level '{}'", config.level))?;
    let dir = config
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = config
        .file
        .file_name()
        .with_context(|| format!("log path {} has no file name", config.file.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;
    Ok(guard)
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
