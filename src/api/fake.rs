//! In-memory [`BlockchainApi`] for controller tests
//!
//! Responses are configured up front; every call is recorded so tests can
//! assert that validation failures never reach the network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::BlockchainApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{Account, Address, Balance, TransactionReceipt, TransactionRequest};

#[derive(Default)]
pub struct FakeApi {
    accounts: Mutex<Option<ClientResult<Vec<Account>>>>,
    balances: Mutex<HashMap<Address, ClientResult<Balance>>>,
    created: Mutex<Option<ClientResult<Account>>>,
    receipt: Mutex<Option<ClientResult<TransactionReceipt>>>,
    balance_delays: Mutex<HashMap<Address, Duration>>,
    calls: Mutex<Vec<String>>,
    balances_in_flight: AtomicUsize,
    max_balances_in_flight: AtomicUsize,
    balances_completed: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(self, accounts: ClientResult<Vec<Account>>) -> Self {
        *self.accounts.lock().unwrap() = Some(accounts);
        self
    }

    pub fn with_balance(self, address: &str, balance: ClientResult<Balance>) -> Self {
        self.balances
            .lock()
            .unwrap()
            .insert(Address::new(address), balance);
        self
    }

    /// Hold the balance answer for `address` back by `delay`
    pub fn with_balance_delay(self, address: &str, delay: Duration) -> Self {
        self.balance_delays
            .lock()
            .unwrap()
            .insert(Address::new(address), delay);
        self
    }

    pub fn with_created(self, account: ClientResult<Account>) -> Self {
        *self.created.lock().unwrap() = Some(account);
        self
    }

    pub fn with_receipt(self, receipt: ClientResult<TransactionReceipt>) -> Self {
        *self.receipt.lock().unwrap() = Some(receipt);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Most balance lookups that were waiting at the same time
    pub fn max_balances_in_flight(&self) -> usize {
        self.max_balances_in_flight.load(Ordering::SeqCst)
    }

    pub fn balances_completed(&self) -> usize {
        self.balances_completed.load(Ordering::SeqCst)
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn unconfigured() -> ClientError {
    ClientError::Network("fake api: no response configured".into())
}

#[async_trait]
impl BlockchainApi for FakeApi {
    async fn create_account(&self, name: Option<&str>) -> ClientResult<Account> {
        self.record(format!("create_account({:?})", name));
        self.created.lock().unwrap().clone().unwrap_or_else(|| Err(unconfigured()))
    }

    async fn list_accounts(&self) -> ClientResult<Vec<Account>> {
        self.record("list_accounts".into());
        self.accounts.lock().unwrap().clone().unwrap_or_else(|| Err(unconfigured()))
    }

    async fn get_account(&self, address: &Address) -> ClientResult<Account> {
        self.record(format!("get_account({})", address));
        let accounts = self.accounts.lock().unwrap().clone();
        match accounts {
            Some(Ok(list)) => list
                .into_iter()
                .find(|a| &a.address == address)
                .ok_or_else(|| ClientError::server(404, format!("Account not found: {}", address))),
            Some(Err(e)) => Err(e),
            None => Err(unconfigured()),
        }
    }

    async fn get_balance(&self, address: &Address) -> ClientResult<Balance> {
        self.record(format!("get_balance({})", address));

        let delay = self.balance_delays.lock().unwrap().get(address).copied();
        let in_flight = self.balances_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_balances_in_flight
            .fetch_max(in_flight, Ordering::SeqCst);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.balances_in_flight.fetch_sub(1, Ordering::SeqCst);
        self.balances_completed.fetch_add(1, Ordering::SeqCst);

        self.balances
            .lock()
            .unwrap()
            .get(address)
            .cloned()
            .unwrap_or_else(|| Err(unconfigured()))
    }

    async fn send_transaction(
        &self,
        request: &TransactionRequest,
    ) -> ClientResult<TransactionReceipt> {
        self.record(format!(
            "send_transaction({} -> {}: {})",
            request.from, request.to, request.amount
        ));
        self.receipt.lock().unwrap().clone().unwrap_or_else(|| Err(unconfigured()))
    }
}
