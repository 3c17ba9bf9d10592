//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use std::collections::HashMap;

use tabled::{settings::Style, Table, Tabled};

use crate::controllers::create_account::PRIVATE_KEY_WARNING;
use crate::controllers::BalanceCell;
use crate::models::{Account, Address};

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

fn balance_text(cell: Option<&BalanceCell>) -> String {
    match cell {
        Some(BalanceCell::Amount(balance)) => balance.to_string(),
        Some(BalanceCell::Error) => "Error".to_string(),
        None => "-".to_string(),
    }
}

/// Format a list of accounts with balances as a table
///
/// Full addresses are printed so they can be copied into other commands.
pub fn format_account_list(
    accounts: &[Account],
    balances: &HashMap<Address, BalanceCell>,
) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let rows: Vec<AccountRow> = accounts
        .iter()
        .map(|account| AccountRow {
            name: account.label().unwrap_or("-").to_string(),
            address: account.address.to_string(),
            balance: balance_text(balances.get(&account.address)),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n{} account(s)\n", table, accounts.len())
}

/// Format a single account's details
pub fn format_account_details(account: &Account, balance: Option<&BalanceCell>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.display_name()));
    output.push_str(&format!("  Address: {}\n", account.address));
    output.push_str(&format!("  Balance: {}\n", balance_text(balance)));

    output
}

/// Format a freshly created account, private key included
pub fn format_created_account(account: &Account) -> String {
    let mut output = String::new();

    output.push_str("Account created successfully!\n");
    output.push_str(&format!(
        "  Name:        {}\n",
        account.label().unwrap_or("Unnamed Account")
    ));
    output.push_str(&format!("  Address:     {}\n", account.address));
    match &account.private_key {
        Some(key) => output.push_str(&format!("  Private Key: {}\n", key.expose())),
        None => output.push_str("  Private Key: (not returned by the backend)\n"),
    }
    output.push('\n');
    output.push_str(PRIVATE_KEY_WARNING);
    output.push('\n');

    output
}
