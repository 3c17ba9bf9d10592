//! Configuration module for chain-console
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Backend base URL resolution

pub mod paths;
pub mod settings;

pub use paths::ClientPaths;
pub use settings::Settings;
