//! Input validation helpers

use shared::{AppError, AppResult};

/// Minimum accepted password length (demo rule, not a security posture)
pub const MIN_PASSWORD_LEN: usize = 4;

/// Shape-check login credentials; no credential store is consulted
pub fn validate_login(email: &str, password: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::validation("Email is required"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
