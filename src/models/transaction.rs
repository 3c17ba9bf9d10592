//! Transaction request and receipt
//!
//! A request is built only to issue one API call and is never stored. The
//! receipt carries the hash the backend assigned to the broadcast.

use serde::{Deserialize, Serialize};

use super::address::Address;
use crate::error::{ClientError, ClientResult};

/// Body of `POST /api/transactions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRequest {
    /// Sending address
    pub from: Address,
    /// Receiving address
    pub to: Address,
    /// Amount, sent to the backend as a JSON number
    pub amount: f64,
}

impl TransactionRequest {
    /// Build a request from raw form values, validating the amount
    pub fn new(from: Address, to: Address, amount: &str) -> ClientResult<Self> {
        Ok(Self {
            from,
            to,
            amount: parse_amount(amount)?,
        })
    }
}

/// Result of a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionReceipt {
    /// Hash assigned by the backend
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}

/// Parse a user-entered amount
///
/// Accepts any finite number strictly greater than zero.
pub fn parse_amount(input: &str) -> ClientResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation("Amount is required".into()));
    }

    let amount: f64 = trimmed
        .parse()
        .map_err(|_| ClientError::Validation("Amount must be a valid number".into()))?;

    if !amount.is_finite() {
        return Err(ClientError::Validation("Amount must be a valid number".into()));
    }
    if amount <= 0.0 {
        return Err(ClientError::Validation("Amount must be greater than 0".into()));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_positive_numbers() {
        assert_eq!(parse_amount("1").unwrap(), 1.0);
        assert_eq!(parse_amount(" 0.0001 ").unwrap(), 0.0001);
        assert_eq!(parse_amount("2.5e3").unwrap(), 2500.0);
    }

    #[test]
    fn test_parse_amount_rejects_zero_negative_and_empty() {
        for input in ["0", "0.0", "-1", "-0.5", "", "   "] {
            let err = parse_amount(input).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {:?}", input);
        }
        assert_eq!(
            parse_amount("0").unwrap_err().user_message(),
            "Amount must be greater than 0"
        );
    }

    #[test]
    fn test_parse_amount_rejects_non_numbers() {
        for input in ["abc", "1.2.3", "NaN", "inf", "-inf"] {
            assert_eq!(
                parse_amount(input).unwrap_err().user_message(),
                "Amount must be a valid number"
            );
        }
    }

    #[test]
    fn test_request_serializes_amount_as_number() {
        let request = TransactionRequest::new("0xa".into(), "0xb".into(), "1.5").unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["from"], "0xa");
        assert_eq!(json["to"], "0xb");
        assert_eq!(json["amount"], serde_json::json!(1.5));
    }

    #[test]
    fn test_receipt_ignores_extra_fields() {
        let json = r#"{"txHash":"0xfeed","from":"0xa","to":"0xb","amount":"1.5","unit":"ETH"}"#;
        let receipt: TransactionReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.tx_hash, "0xfeed");
    }
}
