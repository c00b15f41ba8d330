//! Terminal UI for pozarreal that lists streets and shows their representative and houses.

mod app;
mod config;
mod input;
mod ui;

use std::{
    fs::OpenOptions,
    io,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pozarreal_core::service::StreetService;
use pozarreal_store_memory::{self as memory, MemoryStore};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::{Config, LoggingConfig};
use crate::input::Action;

#[derive(Parser)]
#[command(name = "pozarreal")]
#[command(about = "Browse Pozarreal streets, representatives, and houses")]
struct Cli {
    #[arg(short, long, default_value = "pozarreal.toml", help = "Path to configuration file")]
    config: PathBuf,

    #[arg(short, long, help = "JSON dataset, overrides data.path")]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;
    if let Some(data) = cli.data {
        config.data.path = data.display().to_string();
    }

    init_logging(&config.logging)?;

    // Store + service setup
    let store = MemoryStore::from_json_file(&config.data.path)
        .with_context(|| format!("failed to load dataset {}", config.data.path))?;
    let backend = memory::backend(store, config.data.path.clone());
    let service = Arc::new(StreetService::from_backend(&backend));
    info!(dataset = %config.data.path, "starting street browser");

    // App state
    let mut app = App::new(service, backend.meta);
    app.reload_streets().await;

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    if logging.file.is_empty() {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&logging.file)
        .with_context(|| format!("failed to open log file {}", logging.file))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&logging.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(Duration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
                Action::ReloadStreets => {
                    app.is_loading = true;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    app.reload_streets().await;
                    app.is_loading = false;
                }
                Action::LoadStreetInfo => {
                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    app.open_current_street().await;
                    app.is_loading = false;
                }
            }
        }
    }

    Ok(())
}
