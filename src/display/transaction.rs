//! Transaction display formatting

use crate::models::{TransactionReceipt, TransactionRequest};

/// Format the outcome of a submitted transfer
pub fn format_receipt(request: &TransactionRequest, receipt: &TransactionReceipt) -> String {
    format!(
        "Transaction submitted! Hash: {}\n  From:   {}\n  To:     {}\n  Amount: {}\n",
        receipt.tx_hash, request.from, request.to, request.amount
    )
}
