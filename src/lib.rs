//! Purse - personal finance wallets from the command line
//!
//! Each registered user owns a wallet: a ledger of income and expense
//! transactions plus optional per-category spending limits. Every change to a
//! wallet reports the alerts it caused (a category over budget, or expenses
//! exceeding income). Money can also be transferred between users.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core value types (money, transactions, alerts, users)
//! - `wallet`: The accounting core (ledger, budgets, transfers); no I/O
//! - `storage`: JSON file storage for users and wallets
//! - `audit`: Audit logging system
//! - `services`: Sessions and the operations performed in them
//! - `reports`, `display`: Terminal output
//! - `cli`: Command handlers for the `purse` binary
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use purse::config::{paths::PursePaths, settings::Settings};
//!
//! let paths = PursePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod wallet;

pub use error::PurseError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the diagnostic log subscriber (stderr).
///
/// The filter is read from `PURSE_LOG` and defaults to warnings only.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_env("PURSE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("purse=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
