//! Wallet accounting core
//!
//! A [`Wallet`] combines a [`Ledger`] of transactions with a
//! [`BudgetTracker`] of per-category limits. Every mutation returns the
//! alerts evaluated right after it; alerts never undo the mutation.
//!
//! Nothing in this module performs I/O.
//!
//! # Example
//!
//! ```
//! use purse::models::{Alert, Money};
//! use purse::wallet::Wallet;
//!
//! let mut wallet = Wallet::new();
//! wallet.record_expense("food", Money::from_cents(10000)).unwrap();
//! let alerts = wallet.set_budget("food", Money::from_cents(8000)).unwrap();
//!
//! assert!(alerts.contains(&Alert::BudgetOverrun {
//!     category: "food".into(),
//!     overrun: Money::from_cents(2000),
//! }));
//! ```

pub mod budget;
pub mod ledger;
pub mod transfer;

pub use budget::BudgetTracker;
pub use ledger::{Ledger, Totals};
pub use transfer::{transfer, TransferOutcome};

use std::collections::BTreeMap;

use crate::error::PurseResult;
use crate::models::{Alert, Money, Transaction};

/// Per-user aggregate of ledger and budgets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    ledger: Ledger,
    budgets: BudgetTracker,
}

impl Wallet {
    /// Create an empty wallet
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a wallet from restored parts
    pub fn from_parts(ledger: Ledger, budgets: BudgetTracker) -> Self {
        Self { ledger, budgets }
    }

    pub fn record_income(&mut self, category: &str, amount: Money) -> PurseResult<Vec<Alert>> {
        self.ledger.record_income(category, amount)?;
        Ok(self.check_alerts())
    }

    pub fn record_expense(&mut self, category: &str, amount: Money) -> PurseResult<Vec<Alert>> {
        self.ledger.record_expense(category, amount)?;
        Ok(self.check_alerts())
    }

    /// Record a prepared transaction (used for transfers and notes)
    pub fn record(&mut self, txn: Transaction) -> PurseResult<Vec<Alert>> {
        self.ledger.record(txn)?;
        Ok(self.check_alerts())
    }

    pub fn set_budget(&mut self, category: &str, limit: Money) -> PurseResult<Vec<Alert>> {
        self.budgets.set_budget(category, limit)?;
        Ok(self.check_alerts())
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    pub fn income_by_category(&self) -> BTreeMap<String, Money> {
        self.ledger.income_by_category()
    }

    pub fn expense_by_category(&self) -> BTreeMap<String, Money> {
        self.ledger.expense_by_category()
    }

    pub fn remaining_by_category(&self) -> BTreeMap<String, Money> {
        self.budgets.remaining_by_category(&self.ledger)
    }

    /// Remaining budget for one category, `None` if it has no budget
    pub fn remaining_for(&self, category: &str) -> Option<Money> {
        self.budgets.remaining_for(category, &self.ledger)
    }

    pub fn check_alerts(&self) -> Vec<Alert> {
        self.budgets.check_alerts(&self.ledger)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budgets(&self) -> &BudgetTracker {
        &self.budgets
    }
}
