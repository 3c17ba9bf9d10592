//! Balance and transfer CLI commands

use crate::api::BlockchainApi;
use crate::controllers::transaction::FIELDS_REQUIRED_MESSAGE;
use crate::display::transaction::format_receipt;
use crate::error::{ClientError, ClientResult};
use crate::models::TransactionRequest;

use super::account::parse_address;

/// Print the balance of one address
pub async fn handle_balance_command(api: &dyn BlockchainApi, address: &str) -> ClientResult<()> {
    let address = parse_address(address)?;
    let balance = api.get_balance(&address).await?;
    println!("{} ETH", balance);
    Ok(())
}

/// Build a transfer from command line values
///
/// Applies the same checks as the transaction screen, so nothing invalid
/// reaches the backend.
pub fn build_request(from: &str, to: &str, amount: &str) -> ClientResult<TransactionRequest> {
    let (from, to, amount) = (from.trim(), to.trim(), amount.trim());
    if from.is_empty() || to.is_empty() || amount.is_empty() {
        return Err(ClientError::Validation(FIELDS_REQUIRED_MESSAGE.into()));
    }
    if from == to {
        return Err(ClientError::Validation(
            "Recipient must differ from sender".into(),
        ));
    }
    TransactionRequest::new(from.into(), to.into(), amount)
}

/// Submit a transfer
pub async fn handle_send_command(
    api: &dyn BlockchainApi,
    from: &str,
    to: &str,
    amount: &str,
) -> ClientResult<()> {
    let request = build_request(from, to, amount)?;
    let receipt = api.send_transaction(&request).await?;
    print!("{}", format_receipt(&request, &receipt));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::models::TransactionReceipt;

    #[test]
    fn test_build_request_validation() {
        assert_eq!(
            build_request("0xa", "", "1").unwrap_err().user_message(),
            FIELDS_REQUIRED_MESSAGE
        );
        assert_eq!(
            build_request("0xa", "0xb", "0").unwrap_err().user_message(),
            "Amount must be greater than 0"
        );
        assert!(build_request("0xa", "0xa", "1").is_err());
        assert_eq!(build_request("0xa", "0xb", "1.5").unwrap().amount, 1.5);
    }

    #[tokio::test]
    async fn test_invalid_send_makes_no_call() {
        let api = FakeApi::new();
        let result = handle_send_command(&api, "0xa", "0xb", "abc").await;

        assert_eq!(
            result.unwrap_err().user_message(),
            "Amount must be a valid number"
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_send_surfaces_backend_message() {
        let api = FakeApi::new().with_receipt(Err(ClientError::server(400, "insufficient funds")));
        let result = handle_send_command(&api, "0xa", "0xb", "1").await;

        assert_eq!(result.unwrap_err().user_message(), "insufficient funds");
    }

    #[tokio::test]
    async fn test_send_success() {
        let api = FakeApi::new().with_receipt(Ok(TransactionReceipt {
            tx_hash: "0xhash".into(),
        }));
        handle_send_command(&api, "0xa", "0xb", "1").await.unwrap();
        assert_eq!(api.calls(), vec!["send_transaction(0xa -> 0xb: 1)"]);
    }
}
