//! User registry
//!
//! Maps logins to user identities and checks credentials. Credentials are
//! kept as Argon2 PHC strings; callers only ever get a [`UserHandle`] back.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PurseError, PurseResult};
use crate::models::{UserHandle, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Lookup and registration of users
pub trait UserRegistry {
    /// Find a user by login
    fn lookup(&self, login: &str) -> PurseResult<Option<UserHandle>>;

    /// Register a new user. Returns `false` if the login is already taken.
    fn register(&self, login: &str, credential: &str) -> PurseResult<bool>;

    /// Return the user if `credential` matches the one given at registration
    fn verify(&self, login: &str, credential: &str) -> PurseResult<Option<UserHandle>>;
}

/// Stored form of a registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserRecord {
    id: UserId,
    login: String,
    credential_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRecord {
    fn handle(&self) -> UserHandle {
        UserHandle::new(self.id, self.login.clone())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserData {
    users: Vec<UserRecord>,
}

/// JSON-file backed user registry (`data/users.json`)
pub struct JsonUserRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, UserRecord>>,
}

impl JsonUserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk, replacing anything in memory
    pub fn load(&self) -> PurseResult<()> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PurseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in file_data.users {
            data.insert(record.login.clone(), record);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> PurseResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| PurseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        self.write(data.values().cloned().collect())
    }

    fn write(&self, mut users: Vec<UserRecord>) -> PurseResult<()> {
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.login.cmp(&b.login)));
        write_json_atomic(&self.path, &UserData { users })
    }

    pub fn count(&self) -> PurseResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| PurseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

impl UserRegistry for JsonUserRepository {
    fn lookup(&self, login: &str) -> PurseResult<Option<UserHandle>> {
        let data = self
            .data
            .read()
            .map_err(|e| PurseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(login.trim()).map(UserRecord::handle))
    }

    fn register(&self, login: &str, credential: &str) -> PurseResult<bool> {
        let login = login.trim();
        if login.is_empty() {
            return Err(PurseError::Validation("Login cannot be empty".into()));
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| PurseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.contains_key(login) {
            return Ok(false);
        }

        let record = UserRecord {
            id: UserId::new(),
            login: login.to_string(),
            credential_hash: hash_credential(credential)?,
            created_at: Utc::now(),
        };

        // the registry only learns about the user once it is on disk
        let mut users: Vec<UserRecord> = data.values().cloned().collect();
        users.push(record.clone());
        self.write(users)?;

        data.insert(record.login.clone(), record);
        Ok(true)
    }

    fn verify(&self, login: &str, credential: &str) -> PurseResult<Option<UserHandle>> {
        let data = self
            .data
            .read()
            .map_err(|e| PurseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let Some(record) = data.get(login.trim()) else {
            return Ok(None);
        };

        if credential_matches(credential, &record.credential_hash)? {
            Ok(Some(record.handle()))
        } else {
            Ok(None)
        }
    }
}

/// Argon2id with a small memory cost; the registry is not a security boundary
fn hasher() -> PurseResult<Argon2<'static>> {
    let params = Params::new(4096, 2, 1, None)
        .map_err(|e| PurseError::Config(format!("Invalid Argon2 parameters: {}", e)))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn hash_credential(credential: &str) -> PurseResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    hasher()?
        .hash_password(credential.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PurseError::Storage(format!("Failed to hash credential: {}", e)))
}

fn credential_matches(credential: &str, stored: &str) -> PurseResult<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| PurseError::Storage(format!("Corrupt credential hash: {}", e)))?;
    Ok(hasher()?
        .verify_password(credential.as_bytes(), &parsed)
        .is_ok())
}
