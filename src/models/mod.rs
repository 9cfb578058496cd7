//! Core data models for Purse
//!
//! Plain value types shared by the wallet, storage and service layers.

pub mod alert;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use alert::Alert;
pub use ids::{TransactionId, UserId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
pub use user::UserHandle;
