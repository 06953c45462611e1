use crate::core::domain::error::ValidationError;

/// An XMS account password (plaintext, passed through to the transport).
#[derive(Clone)]
pub struct XtremioPassword(String);

impl XtremioPassword {
    /// Creates a new password without validation.
    pub(crate) fn new_unchecked(password: String) -> Self {
        Self(password)
    }

    /// Returns the password as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for XtremioPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("XtremioPassword(****)")
    }
}

/// Validates a password.
///
/// Passwords belong to existing array accounts, so only emptiness is rejected.
pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    Ok(())
}
