//! Advisory alerts raised after a wallet mutation
//!
//! Alerts are observations, not errors: the mutation that produced them has
//! already been applied.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// An overrun or deficit signal computed from wallet state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Alert {
    /// Spending in a budgeted category went past its limit
    BudgetOverrun { category: String, overrun: Money },
    /// Total expense is greater than total income
    Deficit { amount: Money },
}

impl Alert {
    /// Magnitude of the overrun or deficit (always positive)
    pub fn amount(&self) -> Money {
        match self {
            Self::BudgetOverrun { overrun, .. } => *overrun,
            Self::Deficit { amount } => *amount,
        }
    }

    /// Category the alert is about, if it is a per-category alert
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::BudgetOverrun { category, .. } => Some(category),
            Self::Deficit { .. } => None,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetOverrun { category, overrun } => {
                write!(f, "Budget for '{}' exceeded by {}", category, overrun)
            }
            Self::Deficit { amount } => write!(f, "Expenses exceed income by {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let overrun = Alert::BudgetOverrun {
            category: "food".into(),
            overrun: Money::from_cents(2000),
        };
        assert_eq!(overrun.to_string(), "Budget for 'food' exceeded by 20.00");
        assert_eq!(overrun.category(), Some("food"));

        let deficit = Alert::Deficit {
            amount: Money::from_cents(20000),
        };
        assert_eq!(deficit.to_string(), "Expenses exceed income by 200.00");
        assert_eq!(deficit.amount().cents(), 20000);
        assert_eq!(deficit.category(), None);
    }

    #[test]
    fn test_serialization() {
        let alert = Alert::Deficit {
            amount: Money::from_cents(500),
        };
        let json = serde_json::to_string(&alert).unwrap();
        assert_eq!(json, r#"{"type":"deficit","amount":500}"#);
    }
}
