//! Accounts list controller
//!
//! Loads every account, then every balance concurrently. The balance map is
//! committed only after all lookups have settled, and a failed lookup only
//! marks its own row.

use chrono::{DateTime, Local};
use futures::future::join_all;
use std::collections::HashMap;

use crate::api::BlockchainApi;
use crate::error::ClientResult;
use crate::models::{Account, Address, Balance};

/// Page-level message when the account listing fails
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load accounts";

/// Outcome of one balance lookup as shown in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceCell {
    Amount(Balance),
    Error,
}

/// Accounts together with one balance outcome per account
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountsSnapshot {
    pub accounts: Vec<Account>,
    pub balances: HashMap<Address, BalanceCell>,
}

/// Lifecycle of the list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// List every account and fetch all balances concurrently
///
/// Resolves only once every balance lookup has completed; individual
/// balance failures become [`BalanceCell::Error`].
pub async fn load_accounts_with_balances(
    api: &dyn BlockchainApi,
) -> ClientResult<AccountsSnapshot> {
    let accounts = api.list_accounts().await?;

    let lookups = accounts.iter().map(|account| api.get_balance(&account.address));
    let outcomes = join_all(lookups).await;

    let balances = accounts
        .iter()
        .zip(outcomes)
        .map(|(account, outcome)| {
            let cell = match outcome {
                Ok(balance) => BalanceCell::Amount(balance),
                Err(e) => {
                    tracing::warn!(address = %account.address, error = %e, "balance lookup failed");
                    BalanceCell::Error
                }
            };
            (account.address.clone(), cell)
        })
        .collect();

    Ok(AccountsSnapshot { accounts, balances })
}

/// State of the accounts screen
#[derive(Debug, Clone, Default)]
pub struct AccountsListController {
    state: ListState,
    snapshot: AccountsSnapshot,
    refreshed_at: Option<DateTime<Local>>,
    /// Selected row in the table
    pub selected_index: usize,
}

impl AccountsListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ListState::Loading
    }

    /// Refresh is disabled while a fetch is in flight
    pub fn can_refresh(&self) -> bool {
        !self.is_loading()
    }

    /// Enter the loading state
    ///
    /// Returns `false` when a load is already in flight; the caller must not
    /// start another one.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.state = ListState::Loading;
        true
    }

    /// Commit the outcome of [`load_accounts_with_balances`]
    pub fn apply(&mut self, result: ClientResult<AccountsSnapshot>) {
        match result {
            Ok(snapshot) => {
                tracing::debug!(accounts = snapshot.accounts.len(), "accounts loaded");
                self.snapshot = snapshot;
                self.state = ListState::Loaded;
                self.refreshed_at = Some(Local::now());
                self.clamp_selection();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to list accounts");
                self.snapshot = AccountsSnapshot::default();
                self.state = ListState::Failed(LOAD_FAILED_MESSAGE.to_string());
                self.selected_index = 0;
            }
        }
    }

    /// Dismiss the page-level error
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, ListState::Failed(_)) {
            self.state = ListState::Idle;
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ListState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.snapshot.accounts
    }

    pub fn balances(&self) -> &HashMap<Address, BalanceCell> {
        &self.snapshot.balances
    }

    pub fn balance_for(&self, address: &Address) -> Option<&BalanceCell> {
        self.snapshot.balances.get(address)
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.refreshed_at
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.snapshot.accounts.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.snapshot.accounts.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}
