//! Core data models for chain-console
//!
//! These mirror the JSON bodies exchanged with the backend: accounts,
//! balances, transaction requests and receipts. The client never mutates
//! an account; it only displays what the backend returns.

pub mod account;
pub mod address;
pub mod balance;
pub mod transaction;

pub use account::{Account, PrivateKey};
pub use address::Address;
pub use balance::Balance;
pub use transaction::{parse_amount, TransactionReceipt, TransactionRequest};
