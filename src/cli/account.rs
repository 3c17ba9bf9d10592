//! Account CLI commands
//!
//! Implements CLI commands for listing, creating and inspecting accounts.

use clap::Subcommand;

use crate::api::BlockchainApi;
use crate::controllers::accounts_list::load_accounts_with_balances;
use crate::controllers::create_account::{normalize_name, MAX_NAME_LEN};
use crate::controllers::BalanceCell;
use crate::display::account::{format_account_details, format_account_list, format_created_account};
use crate::error::{ClientError, ClientResult};
use crate::models::Address;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List all accounts with their balances
    List,
    /// Create a new account; its private key is printed once
    Create {
        /// Optional display name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Show one account and its balance
    Show {
        /// Account address
        address: String,
    },
}

/// Handle an account command
pub async fn handle_account_command(
    api: &dyn BlockchainApi,
    cmd: AccountCommands,
) -> ClientResult<()> {
    match cmd {
        AccountCommands::List => {
            let snapshot = load_accounts_with_balances(api).await?;
            print!(
                "{}",
                format_account_list(&snapshot.accounts, &snapshot.balances)
            );
        }

        AccountCommands::Create { name } => {
            let name = name.as_deref().and_then(normalize_name);
            if let Some(name) = &name {
                if name.chars().count() > MAX_NAME_LEN {
                    return Err(ClientError::Validation(format!(
                        "Name must be at most {} characters",
                        MAX_NAME_LEN
                    )));
                }
            }

            let account = api.create_account(name.as_deref()).await?;
            print!("{}", format_created_account(&account));
        }

        AccountCommands::Show { address } => {
            let address = parse_address(&address)?;
            let account = api.get_account(&address).await?;
            let balance = match api.get_balance(&address).await {
                Ok(balance) => BalanceCell::Amount(balance),
                Err(e) => {
                    tracing::warn!(address = %address, error = %e, "balance lookup failed");
                    BalanceCell::Error
                }
            };
            print!("{}", format_account_details(&account, Some(&balance)));
        }
    }

    Ok(())
}

/// Validate an address given on the command line
pub(crate) fn parse_address(raw: &str) -> ClientResult<Address> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation("Address is required".into()));
    }
    Ok(Address::new(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::models::Account;

    #[tokio::test]
    async fn test_create_rejects_long_names_before_any_call() {
        let api = FakeApi::new();
        let result = handle_account_command(
            &api,
            AccountCommands::Create {
                name: Some("x".repeat(MAX_NAME_LEN + 1)),
            },
        )
        .await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_name_is_not_sent() {
        let api = FakeApi::new().with_created(Ok(Account::new("0xnew", None)));
        handle_account_command(
            &api,
            AccountCommands::Create {
                name: Some("   ".into()),
            },
        )
        .await
        .unwrap();

        assert_eq!(api.calls(), vec!["create_account(None)"]);
    }

    #[tokio::test]
    async fn test_show_tolerates_balance_failure() {
        let api = FakeApi::new().with_accounts(Ok(vec![Account::new("0xa", None)]));
        handle_account_command(
            &api,
            AccountCommands::Show {
                address: "0xa".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(api.calls(), vec!["get_account(0xa)", "get_balance(0xa)"]);
    }

    #[test]
    fn test_parse_address() {
        assert!(parse_address("  ").is_err());
        assert_eq!(parse_address(" 0xa ").unwrap().as_str(), "0xa");
    }
}
