//! chain-console - Terminal client for an account-based blockchain node
//!
//! This library provides the core functionality for chain-console: a typed
//! client for the node's REST API, the controllers behind each screen, and a
//! ratatui front end. A command line surface exposes the same operations for
//! scripting.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-based tracing setup
//! - `models`: Accounts, balances, transaction requests and receipts
//! - `api`: The backend API seam and its HTTP implementation
//! - `controllers`: Per-screen state machines
//! - `cli`: Command line handlers
//! - `display`: Terminal output formatting for the command line
//! - `tui`: The interactive interface
//!
//! # Example
//!
//! ```rust,ignore
//! use chain_console::api::{BlockchainApi, HttpApiClient};
//!
//! let api = HttpApiClient::new("http://localhost:8080")?;
//! let accounts = api.list_accounts().await?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod controllers;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::{ClientError, ClientResult};
