use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use chain_console::api::{BlockchainApi, HttpApiClient};
use chain_console::cli::{
    handle_account_command, handle_balance_command, handle_send_command, AccountCommands,
};
use chain_console::config::{paths::HOME_ENV_VAR, ClientPaths, Settings};
use chain_console::error::ClientResult;
use chain_console::logging;
use chain_console::tui::{run_tui, Route};

#[derive(Parser)]
#[command(
    name = "chain-console",
    version,
    about = "Terminal client for a blockchain node",
    long_about = "chain-console talks to a blockchain node's REST API. It lists \
                  accounts with their balances, creates accounts and submits \
                  transfers, either interactively or from the command line."
)]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8080
    #[arg(long, global = true, env = "CHAIN_CONSOLE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui {
        /// Screen to open: /, /create or /transaction
        #[arg(long, default_value = "/")]
        route: String,
    },

    /// Account commands
    #[command(subcommand)]
    Accounts(AccountCommands),

    /// Show the balance of an address
    Balance {
        /// Account address
        address: String,
    },

    /// Send funds between two accounts
    #[command(alias = "tx")]
    Send {
        /// Sending address
        from: String,
        /// Receiving address
        to: String,
        /// Amount, greater than 0
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = ClientPaths::new()?;
    let settings = Settings::load_or_default(&paths)?.with_api_base_url(cli.api_url.as_deref());

    let command = cli.command.unwrap_or(Commands::Tui {
        route: Route::Accounts.path().to_string(),
    });

    if let Commands::Config = command {
        print_config(&paths, &settings)?;
        return Ok(ExitCode::SUCCESS);
    }

    // Logging is best effort; a read-only home should not block the client
    let _guard = match logging::init(&paths, &settings) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    let base_url = settings.api_base_url()?;
    let api: Arc<dyn BlockchainApi> = Arc::new(HttpApiClient::new(&base_url)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let outcome: ClientResult<()> = match command {
        Commands::Tui { route } => {
            run_tui(
                Arc::clone(&api),
                runtime.handle().clone(),
                &settings,
                &base_url,
                Route::from_path(&route),
            )?;
            Ok(())
        }
        Commands::Accounts(cmd) => runtime.block_on(handle_account_command(api.as_ref(), cmd)),
        Commands::Balance { address } => {
            runtime.block_on(handle_balance_command(api.as_ref(), &address))
        }
        Commands::Send { from, to, amount } => {
            runtime.block_on(handle_send_command(api.as_ref(), &from, &to, &amount))
        }
        Commands::Config => Ok(()),
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_config(paths: &ClientPaths, settings: &Settings) -> Result<()> {
    println!("chain-console Configuration");
    println!("===========================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!(
        "Log file:         {}",
        paths.log_dir().join(logging::LOG_FILE_NAME).display()
    );
    println!("({} overrides the config directory)", HOME_ENV_VAR);
    println!();
    println!("Settings:");
    println!("  API base URL: {}", settings.api_base_url()?);
    println!("  Tick rate:    {} ms", settings.tick_rate_ms);
    println!("  Log level:    {}", settings.log_level);
    Ok(())
}
