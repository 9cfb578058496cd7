//! Append-only ledger of income and expense transactions
//!
//! The ledger keeps running totals next to the transaction list. The totals
//! are updated on append and must always equal a fold over the list.

use std::collections::BTreeMap;

use crate::error::{PurseError, PurseResult};
use crate::models::{Money, Transaction, TransactionKind, TransactionValidationError};

/// Running income and expense totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
}

impl Totals {
    /// Income minus expense
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }

    /// How far expense exceeds income, if it does
    pub fn deficit(&self) -> Option<Money> {
        if self.expense > self.income {
            Some(self.expense - self.income)
        } else {
            None
        }
    }
}

/// Ordered record of all transactions for one wallet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    totals: Totals,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously recorded transactions, in order.
    ///
    /// Totals are recomputed; a stored transaction that would be rejected by
    /// `record` makes the whole restore fail.
    pub fn from_transactions<I>(transactions: I) -> PurseResult<Self>
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut ledger = Self::new();
        for txn in transactions {
            ledger.record(txn)?;
        }
        Ok(ledger)
    }

    /// Record an income
    pub fn record_income(&mut self, category: &str, amount: Money) -> PurseResult<&Transaction> {
        self.record(Transaction::new(TransactionKind::Income, category, amount))
    }

    /// Record an expense
    pub fn record_expense(&mut self, category: &str, amount: Money) -> PurseResult<&Transaction> {
        self.record(Transaction::new(TransactionKind::Expense, category, amount))
    }

    /// Validate and append a transaction, then bump the matching total.
    ///
    /// Nothing is changed when validation fails or the total would overflow.
    pub fn record(&mut self, txn: Transaction) -> PurseResult<&Transaction> {
        txn.validate().map_err(|e| match e {
            TransactionValidationError::NonPositiveAmount(amount) => {
                PurseError::InvalidAmount { amount }
            }
            other => PurseError::Validation(other.to_string()),
        })?;

        let total = match txn.kind() {
            TransactionKind::Income => &mut self.totals.income,
            TransactionKind::Expense => &mut self.totals.expense,
        };
        *total = total.checked_add(txn.amount()).ok_or_else(|| {
            PurseError::Validation(format!(
                "Amount {} would overflow the {} total",
                txn.amount(),
                txn.kind()
            ))
        })?;
        self.transactions.push(txn);

        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Running totals (not recomputed)
    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn income_by_category(&self) -> BTreeMap<String, Money> {
        self.sum_by_category(TransactionKind::Income)
    }

    pub fn expense_by_category(&self) -> BTreeMap<String, Money> {
        self.sum_by_category(TransactionKind::Expense)
    }

    fn sum_by_category(&self, kind: TransactionKind) -> BTreeMap<String, Money> {
        self.transactions
            .iter()
            .filter(|txn| txn.kind() == kind)
            .fold(BTreeMap::new(), |mut sums, txn| {
                *sums.entry(txn.category().to_string()).or_default() += txn.amount();
                sums
            })
    }

    /// Transactions in the order they were recorded
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folded_totals(ledger: &Ledger) -> Totals {
        Totals {
            income: ledger.income_by_category().values().copied().sum(),
            expense: ledger.expense_by_category().values().copied().sum(),
        }
    }

    #[test]
    fn test_record_updates_totals() {
        let mut ledger = Ledger::new();
        ledger.record_income("salary", Money::from_cents(100000)).unwrap();
        ledger.record_expense("rent", Money::from_cents(120000)).unwrap();

        let totals = ledger.totals();
        assert_eq!(totals.income.cents(), 100000);
        assert_eq!(totals.expense.cents(), 120000);
        assert_eq!(totals.balance().cents(), -20000);
        assert_eq!(totals.deficit(), Some(Money::from_cents(20000)));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_totals_match_fold() {
        let mut ledger = Ledger::new();
        let entries = [
            (TransactionKind::Income, "salary", 250000),
            (TransactionKind::Expense, "food", 1299),
            (TransactionKind::Expense, "food", 4501),
            (TransactionKind::Income, "gift", 1),
            (TransactionKind::Expense, "transport", 333),
            (TransactionKind::Income, "salary", 250000),
        ];

        for (kind, category, cents) in entries {
            ledger
                .record(Transaction::new(kind, category, Money::from_cents(cents)))
                .unwrap();
            assert_eq!(ledger.totals(), folded_totals(&ledger));
        }

        assert_eq!(ledger.totals().income.cents(), 500001);
        assert_eq!(ledger.totals().expense.cents(), 6133);
    }

    #[test]
    fn test_categories_are_merged() {
        let mut ledger = Ledger::new();
        ledger.record_expense("food", Money::from_cents(100)).unwrap();
        ledger.record_income("food", Money::from_cents(7)).unwrap();
        ledger.record_expense("food", Money::from_cents(250)).unwrap();
        ledger.record_expense("fun", Money::from_cents(50)).unwrap();

        let expenses = ledger.expense_by_category();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses["food"].cents(), 350);
        assert_eq!(expenses["fun"].cents(), 50);

        let income = ledger.income_by_category();
        assert_eq!(income.len(), 1);
        assert_eq!(income["food"].cents(), 7);
    }

    #[test]
    fn test_invalid_amount_leaves_state_unchanged() {
        let mut ledger = Ledger::new();
        ledger.record_income("salary", Money::from_cents(500)).unwrap();
        let before = ledger.clone();

        for cents in [0, -500] {
            let err = ledger
                .record_income("salary", Money::from_cents(cents))
                .unwrap_err();
            assert!(matches!(err, PurseError::InvalidAmount { amount } if amount.cents() == cents));

            let err = ledger
                .record_expense("food", Money::from_cents(cents))
                .unwrap_err();
            assert!(matches!(err, PurseError::InvalidAmount { .. }));
        }

        assert_eq!(ledger, before);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let mut ledger = Ledger::new();
        let near_max = Money::parse("92233720368547758.07").unwrap();
        ledger.record_income("a", near_max).unwrap();
        ledger.record_expense("b", Money::from_cents(10)).unwrap();
        let before = ledger.clone();

        let err = ledger.record_income("a", Money::from_cents(1)).unwrap_err();
        assert!(matches!(err, PurseError::Validation(_)));
        assert_eq!(ledger, before);
        assert_eq!(ledger.totals(), folded_totals(&ledger));

        // the other side still has room
        ledger.record_expense("b", Money::from_cents(1)).unwrap();
        assert_eq!(ledger.totals().expense.cents(), 11);
    }

    #[test]
    fn test_blank_category_rejected() {
        let mut ledger = Ledger::new();
        let err = ledger.record_expense("   ", Money::from_cents(100)).unwrap_err();
        assert!(matches!(err, PurseError::Validation(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_from_transactions_recomputes_totals() {
        let source = vec![
            Transaction::new(TransactionKind::Income, "salary", Money::from_cents(1000)),
            Transaction::new(TransactionKind::Expense, "food", Money::from_cents(300)),
        ];
        let ledger = Ledger::from_transactions(source.clone()).unwrap();
        assert_eq!(ledger.transactions(), source.as_slice());
        assert_eq!(ledger.totals().balance().cents(), 700);

        let bad = vec![Transaction::new(
            TransactionKind::Income,
            "salary",
            Money::from_cents(-1),
        )];
        assert!(Ledger::from_transactions(bad).is_err());
    }

    #[test]
    fn test_no_deficit_when_balanced() {
        let totals = Totals {
            income: Money::from_cents(100),
            expense: Money::from_cents(100),
        };
        assert_eq!(totals.deficit(), None);
    }
}
