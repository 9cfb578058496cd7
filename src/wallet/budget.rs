//! Per-category budget limits and overrun detection
//!
//! The tracker only stores limits. Everything it reports is derived from
//! the ledger it is given.

use std::collections::BTreeMap;

use crate::error::{PurseError, PurseResult};
use crate::models::{Alert, Money};

use super::ledger::Ledger;

/// Spending limits keyed by category name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetTracker {
    limits: BTreeMap<String, Money>,
}

impl BudgetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a tracker from stored limits
    pub fn from_limits<I>(limits: I) -> PurseResult<Self>
    where
        I: IntoIterator<Item = (String, Money)>,
    {
        let mut tracker = Self::new();
        for (category, limit) in limits {
            tracker.set_budget(&category, limit)?;
        }
        Ok(tracker)
    }

    /// Set the limit for a category, replacing any previous one.
    ///
    /// Returns the limit that was replaced.
    pub fn set_budget(&mut self, category: &str, limit: Money) -> PurseResult<Option<Money>> {
        if limit.is_negative() {
            return Err(PurseError::InvalidBudget {
                category: category.to_string(),
                limit,
            });
        }
        if category.trim().is_empty() {
            return Err(PurseError::Validation(
                "Budget category cannot be empty".into(),
            ));
        }

        Ok(self.limits.insert(category.to_string(), limit))
    }

    pub fn limit_for(&self, category: &str) -> Option<Money> {
        self.limits.get(category).copied()
    }

    pub fn limits(&self) -> &BTreeMap<String, Money> {
        &self.limits
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// `limit - spent` for every budgeted category
    pub fn remaining_by_category(&self, ledger: &Ledger) -> BTreeMap<String, Money> {
        let spent = ledger.expense_by_category();
        self.limits
            .iter()
            .map(|(category, limit)| {
                let used = spent.get(category).copied().unwrap_or_default();
                (category.clone(), *limit - used)
            })
            .collect()
    }

    /// Remaining budget for one category; `None` when the category has no budget
    pub fn remaining_for(&self, category: &str, ledger: &Ledger) -> Option<Money> {
        let limit = self.limit_for(category)?;
        let used = ledger
            .expense_by_category()
            .get(category)
            .copied()
            .unwrap_or_default();
        Some(limit - used)
    }

    /// Overrun alerts per category, followed by a deficit alert if expense
    /// exceeds income
    pub fn check_alerts(&self, ledger: &Ledger) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self
            .remaining_by_category(ledger)
            .into_iter()
            .filter(|(_, remaining)| remaining.is_negative())
            .map(|(category, remaining)| Alert::BudgetOverrun {
                category,
                overrun: remaining.abs(),
            })
            .collect();

        if let Some(amount) = ledger.totals().deficit() {
            alerts.push(Alert::Deficit { amount });
        }

        alerts
    }
}
