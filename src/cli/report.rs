//! Summary, history and activity CLI commands

use crate::config::settings::Settings;
use crate::display::format_transaction_history;
use crate::error::PurseResult;
use crate::reports::WalletSummary;
use crate::storage::Storage;

use super::{with_session, Credentials};

/// Print the wallet summary report
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    credentials: &Credentials,
) -> PurseResult<()> {
    let summary = with_session(storage, credentials, |session| {
        Ok(WalletSummary::generate(session.wallet()))
    })?;

    print!("{}", summary.format_terminal(&settings.currency_symbol));
    super::print_alerts(settings, &summary.alerts);
    Ok(())
}

/// Print the transaction history, optionally only the last `limit` entries
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    credentials: &Credentials,
    limit: Option<usize>,
) -> PurseResult<()> {
    let output = with_session(storage, credentials, |session| {
        let transactions = session.wallet().transactions();
        let start = limit.map_or(0, |n| transactions.len().saturating_sub(n));
        Ok(format_transaction_history(
            &transactions[start..],
            &settings.date_format,
            &settings.currency_symbol,
        ))
    })?;

    print!("{}", output);
    Ok(())
}

/// Print the session user's recent audit entries
pub fn handle_activity_command(
    storage: &Storage,
    credentials: &Credentials,
    count: usize,
) -> PurseResult<()> {
    let entries = with_session(storage, credentials, |session| {
        storage.audit.read_recent_for_user(session.login(), count)
    })?;

    if entries.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
