//! User registration CLI command

use crate::error::{PurseError, PurseResult};
use crate::services::SessionService;
use crate::storage::Storage;

use super::{prompt_password, Credentials};

/// Register a new user
///
/// Without `--password` the password is prompted for twice.
pub fn handle_register_command(
    storage: &Storage,
    credentials: &Credentials,
    login: &str,
) -> PurseResult<()> {
    let password = match &credentials.password {
        Some(password) => password.clone(),
        None => {
            let first = prompt_password(&format!("New password for {}: ", login))?;
            let second = prompt_password("Confirm password: ")?;
            if first != second {
                return Err(PurseError::Auth("passwords do not match".into()));
            }
            first
        }
    };

    if password.is_empty() {
        return Err(PurseError::Validation("Password cannot be empty".into()));
    }

    let user = SessionService::new(storage).register(login, &password)?;
    println!("Registered user '{}'", user.login);
    Ok(())
}
