//! Client-side password strength rules for the registration form.
//!
//! The backend enforces its own policy; these checks exist so the form can
//! reject weak passwords before a network round trip, with the same wording
//! the page has always shown.

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters counted as "special" by [`validate_password`].
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// First password rule a candidate password violates.
///
/// The `Display` strings are shown verbatim under the password field, so
/// they are part of the page's visible contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PasswordIssue {
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error("Password must contain at least one uppercase letter")]
    NoUppercase,
    #[error("Password must contain at least one lowercase letter")]
    NoLowercase,
    #[error("Password must contain at least one number")]
    NoDigit,
    #[error("Password must contain at least one special character")]
    NoSpecial,
}

/// Check `password` against the registration rules.
///
/// Rules are checked in a fixed order and only the first violation is
/// reported, so the user fixes one thing at a time.
///
/// # Errors
///
/// Returns the first [`PasswordIssue`] the password violates.
pub fn validate_password(password: &str) -> Result<(), PasswordIssue> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordIssue::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordIssue::NoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordIssue::NoLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordIssue::NoDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(PasswordIssue::NoSpecial);
    }
    Ok(())
}

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;
