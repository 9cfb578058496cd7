//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.
//!
//! Every wallet command runs as one session: log in, perform the operation,
//! print alerts, log out (which saves the wallet).

pub mod report;
pub mod transfer;
pub mod user;
pub mod wallet;

pub use report::{handle_activity_command, handle_history_command, handle_summary_command};
pub use transfer::handle_transfer_command;
pub use user::handle_register_command;
pub use wallet::{handle_alerts_command, handle_budget_command, handle_entry_command, BudgetCommands, EntryKind};

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_alerts;
use crate::error::{PurseError, PurseResult};
use crate::models::Alert;
use crate::services::{Session, SessionService};
use crate::storage::Storage;

/// Login options shared by every command that needs a session
#[derive(Args, Debug, Clone, Default)]
pub struct Credentials {
    /// Login of the user to act as
    #[arg(short, long, global = true, env = "PURSE_USER")]
    pub user: Option<String>,

    /// Password (prompted for when not given)
    #[arg(long, global = true, env = "PURSE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl Credentials {
    fn login(&self) -> PurseResult<&str> {
        self.user
            .as_deref()
            .ok_or_else(|| PurseError::Auth("no user given (use --user or PURSE_USER)".into()))
    }

    fn password(&self, prompt: &str) -> PurseResult<String> {
        match &self.password {
            Some(password) => Ok(password.clone()),
            None => prompt_password(prompt),
        }
    }
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> PurseResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| PurseError::Auth(format!("Failed to read password: {}", e)))
}

/// Log in with the given credentials
pub(crate) fn open_session(storage: &Storage, credentials: &Credentials) -> PurseResult<Session> {
    let login = credentials.login()?;
    let password = credentials.password(&format!("Password for {}: ", login))?;
    SessionService::new(storage).login(login, &password)
}

/// Run `operation` inside a session and save the wallet if it succeeded
///
/// A failed operation ends the session without saving anything.
pub(crate) fn with_session<T>(
    storage: &Storage,
    credentials: &Credentials,
    operation: impl FnOnce(&mut Session) -> PurseResult<T>,
) -> PurseResult<T> {
    let mut session = open_session(storage, credentials)?;
    let value = operation(&mut session)?;
    SessionService::new(storage).logout(session)?;
    Ok(value)
}

pub(crate) fn print_alerts(settings: &Settings, alerts: &[Alert]) {
    if settings.show_alerts && !alerts.is_empty() {
        print!("{}", format_alerts(alerts, &settings.currency_symbol));
    }
}
