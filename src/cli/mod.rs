//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the backend API. Each handler performs at most
//! the calls one TUI screen would and prints the formatted outcome.

pub mod account;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use transaction::{handle_balance_command, handle_send_command};
