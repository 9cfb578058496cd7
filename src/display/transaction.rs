//! Transaction display formatting
//!
//! Formats a wallet's transaction history as a register, oldest first.

use crate::models::{Money, Transaction, TransactionKind};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, date_format: &str, symbol: &str) -> String {
    let (kind, signed) = match txn.kind() {
        TransactionKind::Income => ("+", txn.amount()),
        TransactionKind::Expense => ("-", -txn.amount()),
    };

    let mut row = format!(
        "{} {:16} {:24} {:>14}",
        kind,
        txn.created_at().format(date_format),
        truncate(txn.category(), 24),
        signed.format_with_symbol(symbol)
    );
    if !txn.note().is_empty() {
        row.push_str("  ");
        row.push_str(txn.note());
    }
    row
}

/// Format a list of transactions as a register with a running balance
pub fn format_transaction_history(
    transactions: &[Transaction],
    date_format: &str,
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:16} {:24} {:>14}  {}\n",
        "Date", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    let mut balance = Money::zero();
    for txn in transactions {
        if txn.is_income() {
            balance += txn.amount();
        } else {
            balance -= txn.amount();
        }
        output.push_str(&format_transaction_row(txn, date_format, symbol));
        output.push('\n');
    }

    output.push_str(&"-".repeat(62));
    output.push('\n');
    output.push_str(&format!(
        "{:>43} {:>14}\n",
        "Balance:",
        balance.format_with_symbol(symbol)
    ));

    output
}

/// Truncate to `max_len` characters, padding short strings
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

    #[test]
    fn test_format_transaction_row() {
        let txn = Transaction::new(TransactionKind::Expense, "groceries", Money::from_cents(5000))
            .with_note("weekly shop");

        let formatted = format_transaction_row(&txn, DATE_FORMAT, "$");
        assert!(formatted.starts_with('-'));
        assert!(formatted.contains("groceries"));
        assert!(formatted.contains("-$50.00"));
        assert!(formatted.ends_with("weekly shop"));
    }

    #[test]
    fn test_format_empty_history() {
        let formatted = format_transaction_history(&[], DATE_FORMAT, "$");
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_running_balance() {
        let transactions = vec![
            Transaction::new(TransactionKind::Income, "salary", Money::from_cents(100000)),
            Transaction::new(TransactionKind::Expense, "rent", Money::from_cents(120000)),
        ];

        let formatted = format_transaction_history(&transactions, DATE_FORMAT, "$");
        assert!(formatted.contains("$1000.00"));
        assert!(formatted.contains("Balance:"));
        assert!(formatted.trim_end().ends_with("-$200.00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long category name", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
        assert_eq!(truncate("épicerie fine", 5), "ép...");
    }
}
