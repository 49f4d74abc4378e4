//! Signup input validation. Runs before any credential or database work
//! so a bad submission never reaches the store.

use crate::error::{AppError, AppResult};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Check a signup submission's password pair.
pub fn validate_signup(password: &str, confirm_password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    if password != confirm_password {
        return Err(AppError::BadRequest(
            "Passwords do not match".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_password() {
        let err = validate_signup("12345", "12345").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let err = validate_signup("secret1", "secret2").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn accepts_matching_password_of_min_length() {
        assert!(validate_signup("123456", "123456").is_ok());
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // Six multi-byte characters pass even though byte length differs.
        assert!(validate_signup("ääääää", "ääääää").is_ok());
    }
}
