//! Storage layer for Purse
//!
//! JSON file storage with atomic writes: the user registry, one file per
//! wallet, and the audit log.

pub mod file_io;
pub mod users;
pub mod wallets;

pub use file_io::{read_json, read_json_optional, write_json_atomic};
pub use users::{JsonUserRepository, UserRegistry};
pub use wallets::{
    BudgetRecord, JsonWalletStore, TransactionRecord, WalletRecord, WalletStore,
    WALLET_FORMAT_VERSION,
};

use serde::Serialize;
use tracing::debug;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PursePaths;
use crate::error::PurseError;

/// Main storage coordinator
pub struct Storage {
    paths: PursePaths,
    pub users: JsonUserRepository,
    pub wallets: JsonWalletStore,
    pub audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: PursePaths) -> Result<Self, PurseError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: JsonUserRepository::new(paths.users_file()),
            wallets: JsonWalletStore::new(paths.clone()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    /// Turn audit logging on or off (see `Settings::audit_enabled`)
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    /// Load the user registry from disk. Wallets are loaded per session.
    pub fn load_all(&mut self) -> Result<(), PurseError> {
        self.users.load()?;
        debug!(users = self.users.count()?, "user registry loaded");
        Ok(())
    }

    /// Check if storage has been initialized (settings were saved)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Audit a newly created entity
    pub fn log_create<T: Serialize>(
        &self,
        user: &str,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PurseError> {
        self.log_entries(&[
            AuditEntry::create(entity_type, entity_id, entity_name, entity).by_user(user)
        ])
    }

    /// Audit a change to an existing entity
    #[allow(clippy::too_many_arguments)]
    pub fn log_update<T: Serialize>(
        &self,
        user: &str,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), PurseError> {
        self.log_entries(&[AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        )
        .by_user(user)])
    }

    /// Append prepared entries (no-op when auditing is disabled)
    pub fn log_entries(&self, entries: &[AuditEntry]) -> Result<(), PurseError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log_batch(entries)
    }
}
