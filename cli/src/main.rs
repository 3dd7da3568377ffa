mod api;
mod app;
mod commands;
mod controller;
mod logging;
mod timefmt;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use api::{ApiClient, FlightApi, DEFAULT_API_URL};
use app::{App, Route};
use commands::{handle_command, OneShotCommands};
use controller::DEFAULT_POLL_INTERVAL;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "flightboard")]
#[command(about = "Live flight board and per-flight details in the terminal", long_about = None)]
struct Args {
    /// Flight API base URL
    #[arg(long, default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Board refresh interval in seconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs(), global = true)]
    refresh: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "10", global = true)]
    timeout: u64,

    /// Append logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive flight board
    #[command(name = "board", alias = "tui")]
    Board,

    /// Open the interactive detail view of one flight
    #[command(name = "flight")]
    Flight {
        /// Flight ID
        flight_id: String,
    },

    #[command(flatten)]
    OneShot(OneShotCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let interactive = matches!(args.command, None | Some(Commands::Board) | Some(Commands::Flight { .. }));
    logging::init(args.log_file.as_deref(), interactive)?;

    let api: Arc<dyn FlightApi> = Arc::new(ApiClient::new(args.api_url.clone(), args.timeout)?);
    let refresh = Duration::from_secs(args.refresh.max(1));

    match args.command {
        // Non-interactive commands
        Some(Commands::OneShot(cmd)) => {
            handle_command(cmd, api.as_ref()).await?;
        }

        Some(Commands::Flight { flight_id }) => {
            let route = Route::parse(&format!("/flight/{}", flight_id))
                .with_context(|| format!("Invalid flight ID: {}", flight_id))?;
            run_tui(api, refresh, route).await?;
        }

        // Board/TUI mode (default)
        Some(Commands::Board) | None => {
            run_tui(api, refresh, Route::Board).await?;
        }
    }

    Ok(())
}

async fn run_tui(api: Arc<dyn FlightApi>, refresh: Duration, route: Route) -> Result<()> {
    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(api, refresh, route);
    let res = app.run(&mut terminal).await;
    info!(route = %app.route().path(), "flight board closed");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
