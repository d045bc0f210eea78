//! sysfolio Entry Point
//!
//! Launches the terminal rendition of the portfolio page.
//!
//! # Usage
//!
//! ```bash
//! # Defaults (config from ~/.config/sysfolio/folio.toml if present)
//! sysfolio
//!
//! # Reproducible gallery order, faster rotation
//! sysfolio --seed 7 --interval-ms 2500
//!
//! # Debug logging to a chosen file
//! RUST_LOG=debug sysfolio --log-file /tmp/sysfolio.log
//! ```

use std::fs::{self, File};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::config::{load_config_from_path, resolve_log_path};
use folio_core::{ConfigOverrides, FolioConfig};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sysfolio_tui::App;

/// Terminal portfolio: boot log, projects, stack and a photo gallery
#[derive(Parser, Debug)]
#[command(name = "sysfolio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "FOLIO_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the gallery shuffle
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Gallery auto-advance interval in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Boot-terminal typing speed in milliseconds per character
    #[arg(long, value_name = "MS")]
    char_interval_ms: Option<u64>,

    /// Frame rate limit
    #[arg(long)]
    fps: Option<u32>,

    /// Log file (defaults to ~/.cache/sysfolio/sysfolio.log)
    #[arg(short = 'l', long, env = "FOLIO_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            char_interval_ms: self.char_interval_ms,
            interval_ms: self.interval_ms,
            crossfade_ms: None,
            seed: self.seed,
            fps: self.fps,
        }
    }
}

fn init_logging(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    // stderr shares the tty with the alternate screen, so logs only go to a file
    let file_layer = match resolve_log_path(log_file) {
        Some(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            }
            let file = File::create(&path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<FolioConfig> {
    let mut config = load_config_from_path(args.config.clone()).context("Failed to load config")?;
    args.overrides().apply(&mut config);
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        source = %config.source(),
        file = ?config.config_file_path,
        "Configuration loaded"
    );
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.clone())?;
    let config = load_config(&args)?;

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: sysfolio requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means stdin or stdout is piped, or SSH ran without -t.");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &FolioConfig,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);

    let mut app = App::new(config, area, Utc::now())?;
    let result = app.run(terminal).await;
    app.shutdown();
    result
}
