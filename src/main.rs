use anyhow::Result;
use clap::{Parser, Subcommand};

use purse::cli::{
    handle_activity_command, handle_alerts_command, handle_budget_command, handle_entry_command,
    handle_history_command, handle_register_command, handle_summary_command,
    handle_transfer_command, BudgetCommands, Credentials, EntryKind,
};
use purse::config::{paths::PursePaths, settings::Settings};
use purse::models::Money;
use purse::storage::Storage;

#[derive(Parser)]
#[command(
    name = "purse",
    version,
    about = "Personal finance wallets from the command line",
    long_about = "Purse keeps a wallet of income and expenses for each registered user, \
                  tracks per-category spending limits and warns when a budget is \
                  exceeded or expenses outgrow income."
)]
struct Cli {
    #[command(flatten)]
    credentials: Credentials,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// Login name
        login: String,
    },

    /// Record income
    Income {
        /// Category name (e.g., "salary")
        category: String,
        /// Amount (e.g., "1000" or "1000.00")
        #[arg(allow_hyphen_values = true)]
        amount: Money,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Record an expense
    #[command(alias = "spend")]
    Expense {
        /// Category name (e.g., "food")
        category: String,
        /// Amount (e.g., "25.50")
        #[arg(allow_hyphen_values = true)]
        amount: Money,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show totals, category breakdowns and budgets
    Summary,

    /// List transactions, oldest first
    #[command(alias = "txn")]
    History {
        /// Only show the last N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show current alerts
    Alerts,

    /// Send money to another user
    Transfer {
        /// Recipient login
        recipient: String,
        /// Amount
        #[arg(allow_hyphen_values = true)]
        amount: Money,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show your recent audited changes
    Activity {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    purse::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PursePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);
    storage.load_all()?;

    let credentials = &cli.credentials;

    match cli.command {
        Some(Commands::Register { login }) => {
            handle_register_command(&storage, credentials, &login)?;
        }
        Some(Commands::Income {
            category,
            amount,
            note,
        }) => {
            handle_entry_command(
                &storage,
                &settings,
                credentials,
                EntryKind::Income,
                &category,
                amount,
                note.as_deref(),
            )?;
        }
        Some(Commands::Expense {
            category,
            amount,
            note,
        }) => {
            handle_entry_command(
                &storage,
                &settings,
                credentials,
                EntryKind::Expense,
                &category,
                amount,
                note.as_deref(),
            )?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, credentials, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings, credentials)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, &settings, credentials, limit)?;
        }
        Some(Commands::Alerts) => {
            handle_alerts_command(&storage, &settings, credentials)?;
        }
        Some(Commands::Transfer {
            recipient,
            amount,
            note,
        }) => {
            handle_transfer_command(
                &storage,
                &settings,
                credentials,
                &recipient,
                amount,
                note.as_deref(),
            )?;
        }
        Some(Commands::Activity { count }) => {
            handle_activity_command(&storage, credentials, count)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Purse at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'purse register <login>' to create a user.");
        }
        Some(Commands::Config) => {
            println!("Purse Configuration");
            println!("===================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Show alerts:     {}", settings.show_alerts);
            println!("  Initialized:     {}", storage.is_initialized());
        }
        None => {
            println!("Purse - personal finance wallets");
            println!();
            println!("Run 'purse --help' for usage information.");
            println!("Run 'purse register <login>' to get started.");
        }
    }

    Ok(())
}
