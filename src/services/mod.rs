//! Service layer for Purse
//!
//! Services sit on top of the storage layer and the wallet core: they own
//! sessions, write the audit trail and persist wallets.

pub mod session;
pub mod transfer;
pub mod wallet;

pub use session::{Session, SessionService};
pub use transfer::TransferService;
pub use wallet::WalletService;
