//! Wallet Summary Report
//!
//! Totals, per-category breakdowns and budget usage for a single wallet.

use crate::models::{Alert, Money};
use crate::wallet::{Totals, Wallet};

/// One budgeted category in the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetLine {
    pub category: String,
    pub limit: Money,
    /// Expenses recorded in this category
    pub spent: Money,
    /// `limit - spent`; negative when over budget
    pub remaining: Money,
}

impl BudgetLine {
    pub fn is_over(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Snapshot of a wallet for reporting
#[derive(Debug, Clone)]
pub struct WalletSummary {
    pub totals: Totals,
    /// Income per category, ordered by category
    pub income: Vec<(String, Money)>,
    /// Expenses per category, ordered by category
    pub expenses: Vec<(String, Money)>,
    pub budgets: Vec<BudgetLine>,
    pub alerts: Vec<Alert>,
}

impl WalletSummary {
    /// Build a summary of the wallet's current state
    pub fn generate(wallet: &Wallet) -> Self {
        let expense_by_category = wallet.expense_by_category();

        let budgets = wallet
            .remaining_by_category()
            .into_iter()
            .filter_map(|(category, remaining)| {
                let limit = wallet.budgets().limit_for(&category)?;
                let spent = expense_by_category
                    .get(&category)
                    .copied()
                    .unwrap_or_default();
                Some(BudgetLine {
                    category,
                    limit,
                    spent,
                    remaining,
                })
            })
            .collect();

        Self {
            totals: wallet.totals(),
            income: wallet.income_by_category().into_iter().collect(),
            expenses: expense_by_category.into_iter().collect(),
            budgets,
            alerts: wallet.check_alerts(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str("Wallet Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>14}\n", "Total income:", money(self.totals.income)));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total expenses:",
            money(self.totals.expense)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Balance:",
            money(self.totals.balance())
        ));

        if !self.income.is_empty() {
            output.push_str("\nIncome by category\n");
            output.push_str(&"-".repeat(50));
            output.push('\n');
            for (category, amount) in &self.income {
                output.push_str(&format!("  {:<30} {:>14}\n", category, money(*amount)));
            }
        }

        if !self.expenses.is_empty() {
            output.push_str("\nExpenses by category\n");
            output.push_str(&"-".repeat(50));
            output.push('\n');
            for (category, amount) in &self.expenses {
                output.push_str(&format!("  {:<30} {:>14}\n", category, money(*amount)));
            }
        }

        if !self.budgets.is_empty() {
            output.push_str("\nBudgets\n");
            output.push_str(&"-".repeat(66));
            output.push('\n');
            output.push_str(&format!(
                "  {:<20} {:>14} {:>14} {:>14}\n",
                "Category", "Limit", "Spent", "Remaining"
            ));
            for line in &self.budgets {
                let remaining = if line.is_over() {
                    format!("{} *", money(line.remaining))
                } else {
                    money(line.remaining)
                };
                output.push_str(&format!(
                    "  {:<20} {:>14} {:>14} {:>14}\n",
                    line.category,
                    money(line.limit),
                    money(line.spent),
                    remaining
                ));
            }
            if self.budgets.iter().any(BudgetLine::is_over) {
                output.push_str("\n* = Over budget\n");
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(cents: i64) -> Money {
        Money::from_cents(cents)
    }

    fn sample_wallet() -> Wallet {
        let mut wallet = Wallet::new();
        wallet.record_income("salary", money(100000)).unwrap();
        wallet.record_expense("food", money(10000)).unwrap();
        wallet.record_expense("rent", money(50000)).unwrap();
        wallet.set_budget("food", money(8000)).unwrap();
        wallet.set_budget("travel", money(20000)).unwrap();
        wallet
    }

    #[test]
    fn test_summary_lines() {
        let summary = WalletSummary::generate(&sample_wallet());

        assert_eq!(summary.totals.balance(), money(40000));
        assert_eq!(summary.income, vec![("salary".to_string(), money(100000))]);
        assert_eq!(summary.expenses.len(), 2);
        assert_eq!(
            summary.budgets,
            vec![
                BudgetLine {
                    category: "food".into(),
                    limit: money(8000),
                    spent: money(10000),
                    remaining: money(-2000),
                },
                BudgetLine {
                    category: "travel".into(),
                    limit: money(20000),
                    spent: Money::zero(),
                    remaining: money(20000),
                },
            ]
        );
        assert_eq!(summary.alerts.len(), 1);
    }

    #[test]
    fn test_format_terminal() {
        let output = WalletSummary::generate(&sample_wallet()).format_terminal("$");

        assert!(output.contains("Wallet Summary"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains("$400.00"));
        assert!(output.contains("-$20.00 *"));
        assert!(output.contains("* = Over budget"));
    }

    #[test]
    fn test_empty_wallet() {
        let output = WalletSummary::generate(&Wallet::new()).format_terminal("");

        assert!(output.contains("Balance:"));
        assert!(!output.contains("Budgets"));
        assert!(!output.contains("Income by category"));
    }
}
