use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS Broadcast account username.
///
/// Invariant: not empty or blank. The value is kept exactly as given.
pub struct Username(String);

impl Username {
    /// Query parameter name used by SMS Broadcast (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the username as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMS Broadcast account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// `Debug` output is redacted.
pub struct Password(String);

impl Password {
    /// Query parameter name used by SMS Broadcast (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_kept_verbatim_and_required() {
        assert_eq!(Username::new("  user ").unwrap().as_str(), "  user ");
        assert!(Username::new("").is_err());
        assert_eq!(
            Username::new("   ").unwrap_err(),
            ValidationError::Empty {
                field: Username::FIELD
            }
        );
    }

    #[test]
    fn password_preserves_whitespace_and_hides_debug() {
        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert_eq!(format!("{password:?}"), "Password(***)");
        assert!(Password::new("").is_err());
    }
}
