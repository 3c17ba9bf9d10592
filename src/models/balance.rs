//! Balance model
//!
//! The backend reports balances as plain decimal text, sometimes encoded as
//! a JSON string (`"1.5"`) and sometimes as a number. String amounts are
//! kept digit for digit; chain balances routinely exceed what a fixed
//! precision decimal can hold.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ClientError, ClientResult};

/// Balance of an address at fetch time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Amount in the chain's display unit, as plain decimal text
    #[serde(with = "amount_text")]
    balance: String,
}

impl Balance {
    /// Parse a plain decimal amount such as `12`, `-3` or `0.000001`
    pub fn parse(text: &str) -> ClientResult<Self> {
        let text = text.trim();
        if is_plain_decimal(text) {
            Ok(Self {
                balance: text.to_string(),
            })
        } else {
            Err(ClientError::Json(format!("invalid balance: {:?}", text)))
        }
    }

    /// The amount exactly as the backend reported it
    pub fn as_str(&self) -> &str {
        &self.balance
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.balance)
    }
}

/// `-?digits(.digits)?`
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.map_or(true, all_digits)
}

/// Serde glue for the `balance` field: text out, string or number in
mod amount_text {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(amount: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(amount)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(text) if super::is_plain_decimal(text.trim()) => {
                Ok(text.trim().to_string())
            }
            Value::String(text) => Err(D::Error::custom(format!("invalid balance: {:?}", text))),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!("invalid balance: {}", other))),
        }
    }
}
