//! Wallet persistence
//!
//! Wallets are stored one file per user as a versioned record. The record
//! holds transactions and budget limits only; running totals are rebuilt
//! (and the stored data re-validated) when a wallet is loaded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::PursePaths;
use crate::error::{PurseError, PurseResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind, UserId};
use crate::wallet::{BudgetTracker, Ledger, Wallet};

use super::file_io::{read_json_optional, write_json_atomic};

/// Current wallet record format
pub const WALLET_FORMAT_VERSION: u32 = 1;

/// Load/save port for wallets, keyed by user
pub trait WalletStore {
    /// Load a user's wallet; `None` if the user has never saved one
    fn load(&self, user_id: &UserId) -> PurseResult<Option<Wallet>>;

    /// Replace the stored wallet for a user
    fn save(&self, user_id: &UserId, wallet: &Wallet) -> PurseResult<()>;
}

/// Persisted form of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id(),
            kind: txn.kind(),
            category: txn.category().to_string(),
            amount: txn.amount(),
            note: txn.note().to_string(),
            created_at: txn.created_at(),
        }
    }
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        Transaction::restore(
            record.id,
            record.kind,
            record.category,
            record.amount,
            record.note,
            record.created_at,
        )
    }
}

/// Persisted form of a budget limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub category: String,
    pub limit: Money,
}

/// Persisted form of a wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub version: u32,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    #[serde(default)]
    pub budgets: Vec<BudgetRecord>,
}

impl From<&Wallet> for WalletRecord {
    fn from(wallet: &Wallet) -> Self {
        Self {
            version: WALLET_FORMAT_VERSION,
            transactions: wallet.transactions().iter().map(TransactionRecord::from).collect(),
            budgets: wallet
                .budgets()
                .limits()
                .iter()
                .map(|(category, limit)| BudgetRecord {
                    category: category.clone(),
                    limit: *limit,
                })
                .collect(),
        }
    }
}

impl WalletRecord {
    /// Rebuild the in-memory wallet, validating every stored value
    pub fn into_wallet(self) -> PurseResult<Wallet> {
        if self.version == 0 || self.version > WALLET_FORMAT_VERSION {
            return Err(PurseError::Storage(format!(
                "Unsupported wallet format version {} (expected at most {})",
                self.version, WALLET_FORMAT_VERSION
            )));
        }

        let invalid = |e: PurseError| PurseError::Storage(format!("Invalid wallet record: {}", e));

        let ledger = Ledger::from_transactions(self.transactions.into_iter().map(Transaction::from))
            .map_err(invalid)?;
        let budgets = BudgetTracker::from_limits(
            self.budgets
                .into_iter()
                .map(|record| (record.category, record.limit)),
        )
        .map_err(invalid)?;

        Ok(Wallet::from_parts(ledger, budgets))
    }
}

/// Stores each wallet as `data/wallets/<user-uuid>.json`
pub struct JsonWalletStore {
    paths: PursePaths,
}

impl JsonWalletStore {
    pub fn new(paths: PursePaths) -> Self {
        Self { paths }
    }

    /// Check whether a wallet file exists for the user
    pub fn exists(&self, user_id: &UserId) -> bool {
        self.paths.wallet_file(user_id).exists()
    }
}

impl WalletStore for JsonWalletStore {
    fn load(&self, user_id: &UserId) -> PurseResult<Option<Wallet>> {
        let record: Option<WalletRecord> = read_json_optional(self.paths.wallet_file(user_id))?;
        record.map(WalletRecord::into_wallet).transpose()
    }

    fn save(&self, user_id: &UserId, wallet: &Wallet) -> PurseResult<()> {
        write_json_atomic(self.paths.wallet_file(user_id), &WalletRecord::from(wallet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonWalletStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PursePaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, JsonWalletStore::new(paths))
    }

    fn sample_wallet() -> Wallet {
        let mut wallet = Wallet::new();
        wallet
            .record_income("salary", Money::from_cents(100000))
            .unwrap();
        wallet
            .record(
                Transaction::new(TransactionKind::Expense, "food", Money::from_cents(2550))
                    .with_note("groceries"),
            )
            .unwrap();
        wallet.set_budget("food", Money::from_cents(2000)).unwrap();
        wallet
    }

    #[test]
    fn test_load_missing_wallet() {
        let (_temp, store) = create_test_store();
        let user = UserId::new();
        assert!(store.load(&user).unwrap().is_none());
        assert!(!store.exists(&user));
    }

    #[test]
    fn test_save_and_load() {
        let (_temp, store) = create_test_store();
        let user = UserId::new();
        let wallet = sample_wallet();

        store.save(&user, &wallet).unwrap();
        let loaded = store.load(&user).unwrap().unwrap();

        assert_eq!(loaded, wallet);
        assert_eq!(loaded.totals(), wallet.totals());
        assert_eq!(loaded.transactions()[1].note(), "groceries");
        assert_eq!(loaded.remaining_for("food"), Some(Money::from_cents(-550)));
    }

    #[test]
    fn test_record_format() {
        let record = WalletRecord::from(&sample_wallet());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["version"], 1);
        assert_eq!(json["transactions"][0]["kind"], "income");
        assert_eq!(json["transactions"][0]["amount"], 100000);
        assert!(json["transactions"][0].get("note").is_none());
        assert_eq!(json["budgets"][0]["category"], "food");
        assert_eq!(json["budgets"][0]["limit"], 2000);
        assert!(json.get("total_income").is_none());
    }

    #[test]
    fn test_rejects_future_version() {
        let record = WalletRecord {
            version: WALLET_FORMAT_VERSION + 1,
            transactions: Vec::new(),
            budgets: Vec::new(),
        };
        assert!(matches!(record.into_wallet(), Err(PurseError::Storage(_))));
    }

    #[test]
    fn test_rejects_invalid_stored_values() {
        let mut record = WalletRecord::from(&sample_wallet());
        record.budgets.push(BudgetRecord {
            category: "rent".into(),
            limit: Money::from_cents(-1),
        });
        assert!(matches!(record.into_wallet(), Err(PurseError::Storage(_))));

        let mut record = WalletRecord::from(&sample_wallet());
        record.transactions[0].amount = Money::zero();
        assert!(matches!(record.into_wallet(), Err(PurseError::Storage(_))));
    }
}
