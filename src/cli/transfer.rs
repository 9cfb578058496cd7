//! Transfer CLI command

use crate::config::settings::Settings;
use crate::error::PurseResult;
use crate::models::Money;
use crate::services::TransferService;
use crate::storage::Storage;

use super::{print_alerts, with_session, Credentials};

/// Send money to another user
pub fn handle_transfer_command(
    storage: &Storage,
    settings: &Settings,
    credentials: &Credentials,
    recipient: &str,
    amount: Money,
    note: Option<&str>,
) -> PurseResult<()> {
    let outcome = with_session(storage, credentials, |session| {
        TransferService::new(storage).transfer(session, recipient, amount, note.unwrap_or_default())
    })?;

    println!(
        "Transferred {} to {}",
        amount.format_with_symbol(&settings.currency_symbol),
        recipient.trim()
    );
    print_alerts(settings, &outcome.source_alerts);
    Ok(())
}
