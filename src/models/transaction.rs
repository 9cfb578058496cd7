//! Transaction model
//!
//! A transaction is a single income or expense tagged with a category.
//! Fields are private: once a transaction has been created it cannot be
//! edited, only read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    category: String,
    amount: Money,
    note: String,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    pub fn new(kind: TransactionKind, category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            category: category.into(),
            amount,
            note: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a transaction from its persisted parts
    pub fn restore(
        id: TransactionId,
        kind: TransactionKind,
        category: String,
        amount: Money,
        note: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            category,
            amount,
            note,
            created_at,
        }
    }

    /// Attach a free-form note (builder style, before the transaction is recorded)
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.amount, self.category)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Transaction category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(TransactionKind::Expense, "food", Money::from_cents(1250))
            .with_note("lunch");

        assert_eq!(txn.kind(), TransactionKind::Expense);
        assert_eq!(txn.category(), "food");
        assert_eq!(txn.amount().cents(), 1250);
        assert_eq!(txn.note(), "lunch");
        assert!(!txn.is_income());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let zero = Transaction::new(TransactionKind::Income, "salary", Money::zero());
        assert_eq!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        let blank = Transaction::new(TransactionKind::Income, "  ", Money::from_cents(1));
        assert_eq!(blank.validate(), Err(TransactionValidationError::EmptyCategory));
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(TransactionKind::Income, "salary", Money::from_cents(100000));
        assert_eq!(txn.to_string(), "Income 1000.00 (salary)");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }
}
