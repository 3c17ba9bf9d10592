//! HTTP implementation of [`BlockchainApi`]
//!
//! Wraps a `reqwest::Client` and a base URL injected at construction.
//! Non-success responses are turned into [`ClientError::Server`] using the
//! `error` field of the JSON body when the backend provides one.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::BlockchainApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{Account, Address, Balance, TransactionReceipt, TransactionRequest};

/// Error body shape used by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// reqwest-backed API client
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: Url,
}

impl HttpApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:8080`)
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ClientError::Config(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "API base URL cannot carry a path: '{}'",
                base_url
            )));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL; each segment is percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(ClientError::from);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), %message, "backend rejected request");
        Err(ClientError::server(status.as_u16(), message))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        label: &'static str,
    ) -> ClientResult<T> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(endpoint = label, error = %e, "request failed");
            ClientError::from(e)
        })?;
        Self::decode(response).await
    }
}

/// Extract the backend's message, falling back to a status description
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status))
}

#[async_trait]
impl BlockchainApi for HttpApiClient {
    async fn create_account(&self, name: Option<&str>) -> ClientResult<Account> {
        let url = self.endpoint(&["api", "accounts"]);
        tracing::debug!(path = url.path(), "POST create account");

        let mut request = self.client.post(url);
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            request = request.query(&[("name", name)]);
        }

        let account: Account = self.send(request, "create_account").await?;
        tracing::info!(address = %account.address, "account created");
        Ok(account)
    }

    async fn list_accounts(&self) -> ClientResult<Vec<Account>> {
        let url = self.endpoint(&["api", "accounts"]);
        tracing::debug!(path = url.path(), "GET accounts");

        let accounts: Vec<Account> = self.send(self.client.get(url), "list_accounts").await?;
        Ok(accounts
            .into_iter()
            .map(Account::without_private_key)
            .collect())
    }

    async fn get_account(&self, address: &Address) -> ClientResult<Account> {
        let url = self.endpoint(&["api", "accounts", address.as_str()]);
        tracing::debug!(path = url.path(), "GET account");

        let account: Account = self.send(self.client.get(url), "get_account").await?;
        Ok(account.without_private_key())
    }

    async fn get_balance(&self, address: &Address) -> ClientResult<Balance> {
        let url = self.endpoint(&["api", "accounts", address.as_str(), "balance"]);
        tracing::debug!(path = url.path(), "GET balance");

        self.send(self.client.get(url), "get_balance").await
    }

    async fn send_transaction(
        &self,
        request: &TransactionRequest,
    ) -> ClientResult<TransactionReceipt> {
        let url = self.endpoint(&["api", "transactions"]);
        tracing::debug!(path = url.path(), from = %request.from, to = %request.to, "POST transaction");

        let receipt: TransactionReceipt = self
            .send(self.client.post(url).json(request), "send_transaction")
            .await?;
        tracing::info!(tx_hash = %receipt.tx_hash, "transaction submitted");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let client = HttpApiClient::new("http://localhost:8080").unwrap();
        let url = client.endpoint(&["api", "accounts", "0xabc", "balance"]);
        assert_eq!(url.as_str(), "http://localhost:8080/api/accounts/0xabc/balance");
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_encodes_segments() {
        let client = HttpApiClient::new("http://gateway/chain/").unwrap();
        let url = client.endpoint(&["api", "accounts", "a b/c"]);
        assert_eq!(url.as_str(), "http://gateway/chain/api/accounts/a%20b%2Fc");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpApiClient::new("not a url"),
            Err(ClientError::Config(_))
        ));
        assert!(HttpApiClient::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(400, r#"{"error":"insufficient funds"}"#),
            "insufficient funds"
        );
        assert_eq!(
            error_message(500, "<html>oops</html>"),
            "Request failed with status code 500"
        );
        assert_eq!(
            error_message(404, r#"{"error":""}"#),
            "Request failed with status code 404"
        );
        assert_eq!(error_message(502, ""), "Request failed with status code 502");
    }
}
