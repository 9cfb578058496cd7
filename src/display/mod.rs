//! Display formatting for terminal output
//!
//! Plain-text formatting of wallet data for the CLI.

pub mod alert;
pub mod transaction;

pub use alert::format_alerts;
pub use transaction::{format_transaction_history, format_transaction_row};
