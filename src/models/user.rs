//! User handle
//!
//! The only view of a user that the accounting core and services see.
//! Credentials stay inside the user registry.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// Identity of a registered user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserHandle {
    pub id: UserId,
    pub login: String,
}

impl UserHandle {
    pub fn new(id: UserId, login: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
        }
    }
}

impl fmt::Display for UserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.login, self.id)
    }
}
