//! Transfer service
//!
//! Moves money from the session's wallet to another registered user's
//! wallet. The recipient's wallet is written first; if writing the sender's
//! wallet then fails, the recipient's previous wallet is written back so the
//! two stored wallets never disagree about a transfer.

use tracing::{error, info};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{PurseError, PurseResult};
use crate::models::Money;
use crate::storage::{Storage, TransactionRecord, UserRegistry, WalletStore};
use crate::wallet::{self, TransferOutcome};

use super::session::Session;
use super::wallet::report_alerts;

/// Service for transfers between users
pub struct TransferService<'a> {
    storage: &'a Storage,
    wallets: &'a dyn WalletStore,
}

impl<'a> TransferService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            wallets: &storage.wallets,
        }
    }

    /// Use a different wallet store (the user registry and audit log still
    /// come from `storage`)
    pub fn with_wallet_store(storage: &'a Storage, wallets: &'a dyn WalletStore) -> Self {
        Self { storage, wallets }
    }

    /// Transfer `amount` from the session user to `recipient`.
    ///
    /// Both wallets are saved before this returns. On any error neither the
    /// session nor the stored wallets change.
    pub fn transfer(
        &self,
        session: &mut Session,
        recipient: &str,
        amount: Money,
        note: &str,
    ) -> PurseResult<TransferOutcome> {
        let recipient = self
            .storage
            .users
            .lookup(recipient)?
            .ok_or_else(|| PurseError::user_not_found(recipient.trim()))?;

        if recipient.id == session.user().id {
            return Err(PurseError::Validation(
                "Cannot transfer to your own wallet".into(),
            ));
        }

        let target_before = self.wallets.load(&recipient.id)?.unwrap_or_default();

        let mut source = session.wallet().clone();
        let mut target = target_before.clone();
        let outcome = wallet::transfer(
            &mut source,
            &mut target,
            amount,
            &format!("Transfer to {}", recipient.login),
            &format!("Transfer from {}", session.login()),
            note,
        )?;

        self.wallets
            .save(&recipient.id, &target)
            .map_err(|e| PurseError::Transfer(format!("Failed to save recipient wallet: {}", e)))?;

        if let Err(e) = self.wallets.save(&session.user().id, &source) {
            if let Err(restore) = self.wallets.save(&recipient.id, &target_before) {
                error!(
                    recipient = %recipient.login,
                    error = %restore,
                    "failed to restore recipient wallet after aborted transfer"
                );
            }
            return Err(PurseError::Transfer(format!(
                "Failed to save sender wallet: {}",
                e
            )));
        }

        session.replace_wallet(source);

        let outgoing = TransactionRecord::from(&outcome.outgoing);
        let incoming = TransactionRecord::from(&outcome.incoming);
        self.storage.log_entries(&[
            AuditEntry::create(
                EntityType::Transfer,
                outgoing.id.to_string(),
                Some(outgoing.category.clone()),
                &outgoing,
            )
            .by_user(session.login()),
            AuditEntry::create(
                EntityType::Transfer,
                incoming.id.to_string(),
                Some(incoming.category.clone()),
                &incoming,
            )
            .by_user(session.login()),
        ])?;

        report_alerts(session.login(), &outcome.source_alerts);
        report_alerts(&recipient.login, &outcome.target_alerts);
        info!(
            from = %session.login(),
            to = %recipient.login,
            amount = %amount,
            "transfer completed"
        );

        Ok(outcome)
    }
}
