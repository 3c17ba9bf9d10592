//! Runs API calls for the UI loop
//!
//! Each call is spawned onto the tokio runtime and its outcome is posted back
//! into the event channel tagged with the screen mount that requested it.
//! Nothing here touches screen state; the UI loop applies outcomes when it
//! receives them.

use std::future::Future;
use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;

use super::event::{ApiEvent, Event};
use crate::api::BlockchainApi;
use crate::controllers::{accounts_list, BalanceLookup, CreateRequest};
use crate::models::TransactionRequest;

/// Spawns API calls and reports their completion as events
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn BlockchainApi>,
    runtime: Handle,
    sender: mpsc::Sender<Event>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn BlockchainApi>, runtime: Handle, sender: mpsc::Sender<Event>) -> Self {
        Self {
            api,
            runtime,
            sender,
        }
    }

    fn spawn<F>(&self, mount: u64, call: F)
    where
        F: Future<Output = ApiEvent> + Send + 'static,
    {
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let event = call.await;
            // The UI loop is gone when sending fails; nothing left to update.
            let _ = sender.send(Event::Api { mount, event });
        });
    }

    /// Accounts screen: list accounts, then all balances
    pub fn list_accounts_with_balances(&self, mount: u64) {
        let api = Arc::clone(&self.api);
        self.spawn(mount, async move {
            let result = accounts_list::load_accounts_with_balances(api.as_ref()).await;
            ApiEvent::AccountsListed(result)
        });
    }

    /// Create screen: create the account
    pub fn create_account(&self, mount: u64, request: CreateRequest) {
        let api = Arc::clone(&self.api);
        self.spawn(mount, async move {
            ApiEvent::AccountCreated(api.create_account(request.name.as_deref()).await)
        });
    }

    /// Transaction screen: accounts for the selectors
    pub fn load_transfer_accounts(&self, mount: u64) {
        let api = Arc::clone(&self.api);
        self.spawn(mount, async move {
            ApiEvent::TransferAccountsLoaded(api.list_accounts().await)
        });
    }

    /// Transaction screen: sender balance
    pub fn lookup_balance(&self, mount: u64, lookup: BalanceLookup) {
        let api = Arc::clone(&self.api);
        self.spawn(mount, async move {
            let result = api.get_balance(&lookup.address).await;
            ApiEvent::SenderBalance { lookup, result }
        });
    }

    /// Transaction screen: submit
    pub fn send_transaction(&self, mount: u64, request: TransactionRequest) {
        let api = Arc::clone(&self.api);
        self.spawn(mount, async move {
            let result = api.send_transaction(&request).await;
            ApiEvent::TransactionSent { request, result }
        });
    }
}
