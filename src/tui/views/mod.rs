//! TUI Views module
//!
//! One view per route, plus the navigation bar and status bar shared by all
//! of them.

pub mod accounts;
pub mod create_account;
pub mod navbar;
pub mod status_bar;
pub mod transaction;

use ratatui::Frame;

use super::app::{App, Screen};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    navbar::render(frame, app, layout.navbar);

    match app.screen() {
        Screen::Accounts(controller) => accounts::render(frame, controller, app.tick, layout.main),
        Screen::CreateAccount(controller) => {
            create_account::render(frame, controller, app.input_mode, app.tick, layout.main)
        }
        Screen::Transaction(controller) => {
            transaction::render(frame, controller, app.input_mode, app.tick, layout.main)
        }
    }

    status_bar::render(frame, app, layout.status_bar);
}
