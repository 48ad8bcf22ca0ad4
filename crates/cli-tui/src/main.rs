use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use jobtrack_core::TrackerConfig;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{stdout, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod app;
mod render;
mod theme;

use app::App;

/// Job application tracker terminal UI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (JSON or TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = TrackerConfig::resolve_path(args.config.as_deref());
    let cfg = TrackerConfig::load_config(config_path.as_deref())
        .context("Failed to load configuration")?;

    if let Some(log_file) = &cfg.log_file {
        init_file_logging(log_file)?;
    }

    let source = cfg.job_source();
    let tick_rate = Duration::from_millis(cfg.tick_rate_ms);
    let mut app = App::new(source, cfg, config_path).context("Failed to load job applications")?;

    // Setup terminal
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, tick_rate);

    // Restore terminal even when the loop failed
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        app.clear_expired_message();
        terminal.draw(|f| render::ui(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            tracing::info!("Exiting on user request");
            return Ok(());
        }
    }
}

/// Send tracing output to a file; the terminal itself belongs to the UI
fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!("jobtrack-tui v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
