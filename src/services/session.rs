//! Session service
//!
//! Registration, login and logout. A [`Session`] is the explicit context
//! every wallet operation runs in: it pairs the authenticated user with
//! their wallet for the duration of one login.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{PurseError, PurseResult};
use crate::models::UserHandle;
use crate::storage::{Storage, UserRegistry, WalletStore};
use crate::wallet::Wallet;

/// An authenticated user and their wallet
#[derive(Debug, Clone)]
pub struct Session {
    user: UserHandle,
    wallet: Wallet,
}

impl Session {
    pub fn new(user: UserHandle, wallet: Wallet) -> Self {
        Self { user, wallet }
    }

    pub fn user(&self) -> &UserHandle {
        &self.user
    }

    pub fn login(&self) -> &str {
        &self.user.login
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    #[cfg(test)]
    pub(crate) fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }

    pub(crate) fn replace_wallet(&mut self, wallet: Wallet) {
        self.wallet = wallet;
    }
}

/// Service for user registration and sessions
pub struct SessionService<'a> {
    storage: &'a Storage,
}

impl<'a> SessionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a user and create their (empty) wallet
    pub fn register(&self, login: &str, credential: &str) -> PurseResult<UserHandle> {
        if !self.storage.users.register(login, credential)? {
            return Err(PurseError::Duplicate {
                entity_type: "User",
                identifier: login.trim().to_string(),
            });
        }

        let user = self
            .storage
            .users
            .lookup(login)?
            .ok_or_else(|| PurseError::user_not_found(login))?;

        let wallet = Wallet::new();
        self.storage.wallets.save(&user.id, &wallet)?;

        self.storage.log_create(
            &user.login,
            EntityType::User,
            user.id.to_string(),
            Some(user.login.clone()),
            &user,
        )?;

        info!(login = %user.login, id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticate and open a session with the user's stored wallet
    ///
    /// A user without a stored wallet starts with an empty one.
    pub fn login(&self, login: &str, credential: &str) -> PurseResult<Session> {
        let user = self
            .storage
            .users
            .verify(login, credential)?
            .ok_or_else(|| PurseError::Auth("invalid login or password".into()))?;

        let wallet = self.storage.wallets.load(&user.id)?.unwrap_or_default();

        info!(
            login = %user.login,
            transactions = wallet.transactions().len(),
            "session opened"
        );
        Ok(Session::new(user, wallet))
    }

    /// Persist the session's wallet without ending the session
    pub fn save(&self, session: &Session) -> PurseResult<()> {
        self.storage.wallets.save(&session.user.id, &session.wallet)
    }

    /// Persist the wallet and end the session
    pub fn logout(&self, session: Session) -> PurseResult<()> {
        self.save(&session)?;
        info!(login = %session.user.login, "session closed");
        Ok(())
    }
}
