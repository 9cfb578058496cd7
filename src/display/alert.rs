//! Alert display formatting

use crate::models::Alert;

/// Format alerts one per line, prefixed with a marker
pub fn format_alerts(alerts: &[Alert], symbol: &str) -> String {
    let mut output = String::new();
    for alert in alerts {
        let message = match alert {
            Alert::BudgetOverrun { category, overrun } => format!(
                "Budget for '{}' exceeded by {}",
                category,
                overrun.format_with_symbol(symbol)
            ),
            Alert::Deficit { amount } => format!(
                "Expenses exceed income by {}",
                amount.format_with_symbol(symbol)
            ),
        };
        output.push_str(&format!("! {}\n", message));
    }
    output
}
