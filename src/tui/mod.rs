//! Terminal User Interface module
//!
//! A ratatui front end with one screen per route: the accounts list, the
//! create-account form and the send-transaction form. Screens own a
//! controller; API calls run on the tokio runtime and their results come
//! back through the event channel.

pub mod app;
pub mod dispatch;
pub mod event;
pub mod handler;
pub mod router;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use router::Route;
pub use terminal::run_tui;
