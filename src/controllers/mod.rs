//! Page controllers
//!
//! Each controller owns the state of one screen as an explicit state enum
//! and knows how to start and finish the API calls that screen needs.
//! Controllers never perform I/O themselves: starting an operation returns
//! a request value that the caller executes on the async runtime, and the
//! outcome is handed back through an `apply_*` method. This keeps every
//! transition synchronous and testable in isolation.

pub mod accounts_list;
pub mod create_account;
pub mod text_field;
pub mod transaction;

pub use accounts_list::{AccountsListController, AccountsSnapshot, BalanceCell, ListState};
pub use create_account::{CreateAccountController, CreateRequest, CreateState};
pub use text_field::TextField;
pub use transaction::{
    BalanceLookup, LookupPurpose, SenderBalance, Submission, TransactionController,
    TransactionField,
};
