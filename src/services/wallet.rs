//! Wallet service
//!
//! Runs wallet mutations inside a session, writes the audit trail and logs
//! any alerts the mutation produced. A mutation only reaches the session
//! wallet once its audit entry is written. Persistence happens at logout.

use serde_json::json;
use tracing::warn;

use crate::audit::{generate_diff, EntityType};
use crate::error::PurseResult;
use crate::models::{Alert, Money, Transaction, TransactionKind};
use crate::storage::{Storage, TransactionRecord};

use super::session::Session;

/// Service for recording transactions and budgets
pub struct WalletService<'a> {
    storage: &'a Storage,
}

impl<'a> WalletService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add_income(
        &self,
        session: &mut Session,
        category: &str,
        amount: Money,
        note: &str,
    ) -> PurseResult<Vec<Alert>> {
        self.record(session, TransactionKind::Income, category, amount, note)
    }

    pub fn add_expense(
        &self,
        session: &mut Session,
        category: &str,
        amount: Money,
        note: &str,
    ) -> PurseResult<Vec<Alert>> {
        self.record(session, TransactionKind::Expense, category, amount, note)
    }

    fn record(
        &self,
        session: &mut Session,
        kind: TransactionKind,
        category: &str,
        amount: Money,
        note: &str,
    ) -> PurseResult<Vec<Alert>> {
        let txn = Transaction::new(kind, category.trim(), amount).with_note(note);
        let record = TransactionRecord::from(&txn);

        let mut next = session.wallet().clone();
        let alerts = next.record(txn)?;

        self.storage.log_create(
            session.login(),
            EntityType::Transaction,
            record.id.to_string(),
            Some(record.category.clone()),
            &record,
        )?;
        session.replace_wallet(next);

        report_alerts(session.login(), &alerts);
        Ok(alerts)
    }

    /// Set (or replace) a category budget
    pub fn set_budget(
        &self,
        session: &mut Session,
        category: &str,
        limit: Money,
    ) -> PurseResult<Vec<Alert>> {
        let category = category.trim();
        let previous = session.wallet().budgets().limit_for(category);

        let mut next = session.wallet().clone();
        let alerts = next.set_budget(category, limit)?;

        let after = json!({ "category": category, "limit": limit.to_string() });
        match previous {
            Some(old) => {
                let before = json!({ "category": category, "limit": old.to_string() });
                self.storage.log_update(
                    session.login(),
                    EntityType::Budget,
                    category,
                    Some(category.to_string()),
                    &before,
                    &after,
                    generate_diff(&before, &after),
                )?;
            }
            None => {
                self.storage.log_create(
                    session.login(),
                    EntityType::Budget,
                    category,
                    Some(category.to_string()),
                    &after,
                )?;
            }
        }
        session.replace_wallet(next);

        report_alerts(session.login(), &alerts);
        Ok(alerts)
    }

    /// Current alerts without mutating anything
    pub fn alerts(&self, session: &Session) -> Vec<Alert> {
        session.wallet().check_alerts()
    }
}

pub(crate) fn report_alerts(login: &str, alerts: &[Alert]) {
    for alert in alerts {
        match alert {
            Alert::BudgetOverrun { category, overrun } => {
                warn!(login, category = %category, overrun = %overrun, "budget exceeded")
            }
            Alert::Deficit { amount } => {
                warn!(login, deficit = %amount, "expenses exceed income")
            }
        }
    }
}
