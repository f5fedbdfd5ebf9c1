use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hex_board::config::AppConfig;
use hex_board::game::GameState;
use hex_board::logging::{self, LogTarget};
use hex_board::session::{self, ConsoleMoveSource, ConsoleRenderer};
use hex_board::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Hex in the terminal.
#[derive(Parser)]
#[command(name = "hex", about = "Two-player Hex on an N x N board")]
struct Cli {
    /// Board size (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "hex.toml")]
    config: PathBuf,

    /// Play with typed coordinates instead of the full-screen UI
    #[arg(long)]
    console: bool,

    /// Log level (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let loaded = AppConfig::load_optional(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let config_missing = loaded.is_none();
    let mut app_config = loaded.unwrap_or_default();

    // Apply CLI overrides
    if let Some(size) = cli.size {
        app_config.board.size = size;
    }
    if let Some(level) = cli.log_level {
        app_config.log.level = level;
    }
    if let Some(file) = cli.log_file {
        app_config.log.file = Some(file);
    }
    app_config.validate().context("invalid configuration")?;

    let target = LogTarget::select(cli.console, app_config.log.file.as_deref());
    logging::init(app_config.log.tracing_level()?, &target)
        .with_context(|| format!("setting up logging to {target:?}"))?;
    if config_missing {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let size = app_config.board.size;
    if cli.console {
        run_console(size)
    } else {
        run_tui(size)
    }
}

fn run_console(size: usize) -> Result<()> {
    let mut state = GameState::new(size)?;
    let stdin = io::stdin();
    let mut source = ConsoleMoveSource::new(stdin.lock(), io::stdout());
    let mut renderer = ConsoleRenderer::new(io::stdout());

    session::play(&mut state, &mut source, &mut renderer).context("console session")?;
    Ok(())
}

fn run_tui(size: usize) -> Result<()> {
    let mut app = App::new(size)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    Ok(res?)
}
