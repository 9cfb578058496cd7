//! Income, expense and budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::PurseResult;
use crate::models::Money;
use crate::services::WalletService;
use crate::storage::Storage;

use super::{print_alerts, with_session, Credentials};

/// Which side of the ledger an entry goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or replace) the spending limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit (e.g., "80" or "80.00")
        #[arg(allow_hyphen_values = true)]
        limit: Money,
    },

    /// List budgets with what is left of each
    List,
}

/// Record an income or expense
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    credentials: &Credentials,
    kind: EntryKind,
    category: &str,
    amount: Money,
    note: Option<&str>,
) -> PurseResult<()> {
    let note = note.unwrap_or_default();
    let symbol = &settings.currency_symbol;

    let alerts = with_session(storage, credentials, |session| {
        let service = WalletService::new(storage);
        match kind {
            EntryKind::Income => service.add_income(session, category, amount, note),
            EntryKind::Expense => service.add_expense(session, category, amount, note),
        }
    })?;

    let label = match kind {
        EntryKind::Income => "income",
        EntryKind::Expense => "expense",
    };
    println!(
        "Recorded {} of {} in '{}'",
        label,
        amount.format_with_symbol(symbol),
        category.trim()
    );
    print_alerts(settings, &alerts);
    Ok(())
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    credentials: &Credentials,
    cmd: BudgetCommands,
) -> PurseResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let alerts = with_session(storage, credentials, |session| {
                WalletService::new(storage).set_budget(session, &category, limit)
            })?;
            println!(
                "Budget for '{}' set to {}",
                category.trim(),
                limit.format_with_symbol(symbol)
            );
            print_alerts(settings, &alerts);
        }
        BudgetCommands::List => {
            let remaining = with_session(storage, credentials, |session| {
                Ok(session
                    .wallet()
                    .budgets()
                    .limits()
                    .iter()
                    .map(|(category, limit)| {
                        let left = session.wallet().remaining_for(category).unwrap_or(*limit);
                        (category.clone(), *limit, left)
                    })
                    .collect::<Vec<_>>())
            })?;

            if remaining.is_empty() {
                println!("No budgets set. Use 'purse budget set' to add one.");
                return Ok(());
            }

            println!("{:<24} {:>14} {:>14}", "Category", "Limit", "Remaining");
            println!("{}", "-".repeat(54));
            for (category, limit, left) in remaining {
                println!(
                    "{:<24} {:>14} {:>14}",
                    category,
                    limit.format_with_symbol(symbol),
                    left.format_with_symbol(symbol)
                );
            }
        }
    }

    Ok(())
}

/// Show the current alerts
pub fn handle_alerts_command(
    storage: &Storage,
    settings: &Settings,
    credentials: &Credentials,
) -> PurseResult<()> {
    let alerts = with_session(storage, credentials, |session| {
        Ok(WalletService::new(storage).alerts(session))
    })?;

    if alerts.is_empty() {
        println!("No alerts.");
    } else {
        print!(
            "{}",
            crate::display::format_alerts(&alerts, &settings.currency_symbol)
        );
    }
    Ok(())
}
