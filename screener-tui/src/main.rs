//! Halal Screener: terminal dashboard over the `/stocks-screener` backend.
//!
//! Layout:
//! - Sidebar: Stocks / News / ETF screeners (only Stocks is live)
//! - Search: ticker filter over the loaded rows
//! - Table: ticker, company, compliance status, sector, price, RVOL, volume, change

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};

use screener_core::{HttpStockSource, ScreenerConfig, StockSource};
use screener_tui::app::AppState;
use screener_tui::worker::{self, WorkerCommand};
use screener_tui::{input, logging, ui};

#[derive(Parser)]
#[command(
    name = "halal-screener",
    about = "Halal stock screener: terminal dashboard"
)]
struct Cli {
    /// Path to a TOML config file. Defaults to <config dir>/halal-screener/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend origin, e.g. http://127.0.0.1:8000. Overrides the config file.
    #[arg(long)]
    base_url: Option<String>,

    /// Log file. Defaults to <config dir>/halal-screener/screener.log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Paths
    let app_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("halal-screener");
    let config_path = cli.config.unwrap_or_else(|| app_dir.join("config.toml"));
    let log_path = cli.log_file.unwrap_or_else(|| app_dir.join("screener.log"));

    let mut config = ScreenerConfig::load(&config_path)?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    // Logging is best-effort: the screen works without it.
    if let Err(e) = logging::init(&log_path, &config.log_level) {
        eprintln!("logging disabled: {e:#}");
    }
    info!(config = %config_path.display(), url = %config.stocks_url(), "starting halal-screener");

    let source = HttpStockSource::new(&config)?;
    let source_label = source.describe();

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx, Box::new(source))
        .context("spawning worker thread")?;

    let mut app = AppState::new(cmd_tx.clone(), resp_rx, source_label);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    app.mount();

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);
    let app_busy = app.fetch_in_flight();
    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }

    // Shutdown worker. Fetches are never cancelled, so only join an idle worker.
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    drop(app);
    if !app_busy {
        let _ = worker_handle.join();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("halal-screener exited");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        app.drain_worker();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
