//! Moving money between two wallets
//!
//! A transfer is an expense on the source wallet paired with an income of
//! the same amount on the target wallet. Both sides are applied to copies
//! first and only swapped in once both succeeded, so a failure on either
//! side leaves both wallets untouched.

use crate::error::{PurseError, PurseResult};
use crate::models::{Alert, Money, Transaction, TransactionKind};

use super::Wallet;

/// Result of a completed transfer
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// Expense recorded on the source wallet
    pub outgoing: Transaction,
    /// Income recorded on the target wallet
    pub incoming: Transaction,
    /// Alerts on the source wallet after the transfer
    pub source_alerts: Vec<Alert>,
    /// Alerts on the target wallet after the transfer
    pub target_alerts: Vec<Alert>,
}

/// Debit `source` and credit `target` with `amount`.
///
/// `outgoing_category` and `incoming_category` name the two sides,
/// e.g. "Transfer to bob" / "Transfer from alice".
pub fn transfer(
    source: &mut Wallet,
    target: &mut Wallet,
    amount: Money,
    outgoing_category: &str,
    incoming_category: &str,
    note: &str,
) -> PurseResult<TransferOutcome> {
    if !amount.is_positive() {
        return Err(PurseError::InvalidAmount { amount });
    }

    let outgoing =
        Transaction::new(TransactionKind::Expense, outgoing_category, amount).with_note(note);
    let incoming =
        Transaction::new(TransactionKind::Income, incoming_category, amount).with_note(note);

    let mut next_source = source.clone();
    let mut next_target = target.clone();

    let source_alerts = next_source.record(outgoing.clone())?;
    let target_alerts = next_target.record(incoming.clone())?;

    *source = next_source;
    *target = next_target;

    Ok(TransferOutcome {
        outgoing,
        incoming,
        source_alerts,
        target_alerts,
    })
}
