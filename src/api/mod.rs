//! Backend API access
//!
//! [`BlockchainApi`] is the seam between the controllers and the network:
//! the TUI and command line surfaces hold an `Arc<dyn BlockchainApi>`, the
//! production implementation is [`HttpApiClient`], and tests substitute an
//! in-memory fake.
//!
//! Every call is a single request whose outcome is surfaced directly to the
//! caller. There are no retries, no timeouts beyond the transport's own, and
//! no caching.

pub mod client;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{Account, Address, Balance, TransactionReceipt, TransactionRequest};

pub use client::HttpApiClient;

/// The five backend operations the client relies on
#[async_trait]
pub trait BlockchainApi: Send + Sync {
    /// `POST /api/accounts[?name=]`; the only response that carries a private key
    async fn create_account(&self, name: Option<&str>) -> ClientResult<Account>;

    /// `GET /api/accounts`
    async fn list_accounts(&self) -> ClientResult<Vec<Account>>;

    /// `GET /api/accounts/{address}`
    async fn get_account(&self, address: &Address) -> ClientResult<Account>;

    /// `GET /api/accounts/{address}/balance`
    async fn get_balance(&self, address: &Address) -> ClientResult<Balance>;

    /// `POST /api/transactions`
    async fn send_transaction(&self, request: &TransactionRequest)
        -> ClientResult<TransactionReceipt>;
}
