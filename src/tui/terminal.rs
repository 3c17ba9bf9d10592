//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::api::BlockchainApi;
use crate::config::settings::Settings;

use super::app::App;
use super::dispatch::Dispatcher;
use super::event::EventHandler;
use super::handler::handle_event;
use super::router::Route;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// `runtime` executes API calls; this function itself blocks the calling
/// thread in the UI loop until the user quits.
pub fn run_tui(
    api: Arc<dyn BlockchainApi>,
    runtime: Handle,
    settings: &Settings,
    api_base_url: &str,
    route: Route,
) -> Result<()> {
    let mut terminal = init_terminal()?;

    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms.max(16)));
    let dispatcher = Dispatcher::new(api, runtime, events.sender());
    let mut app = App::new(dispatcher, route, api_base_url);

    tracing::info!(route = %route, api = api_base_url, "tui started");

    let outcome = run_loop(&mut terminal, &events, &mut app);

    // Restore even when the loop failed
    restore_terminal()?;
    tracing::info!("tui stopped");
    outcome
}

fn run_loop(terminal: &mut Tui, events: &EventHandler, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events.next()?;
        handle_event(app, event)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
