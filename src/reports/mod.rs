//! Reports module for Purse
//!
//! Read-only views over a wallet, formatted for the terminal.

pub mod summary;

pub use summary::{BudgetLine, WalletSummary};
