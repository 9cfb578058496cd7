//! Configuration module for Purse
//!
//! - Path resolution for data, wallets and the audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PursePaths;
pub use settings::Settings;
