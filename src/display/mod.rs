//! Display formatting for terminal output
//!
//! Formats accounts, balances and receipts for the command line surface.

pub mod account;
pub mod transaction;

pub use account::{format_account_details, format_account_list, format_created_account};
pub use transaction::format_receipt;
