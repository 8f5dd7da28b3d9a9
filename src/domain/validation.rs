use std::fmt;

/// Coarse grouping of [`ValidationError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The sender id (`from`) is missing or malformed.
    Sender,
    /// The recipient list is empty or contains a non-Australian-mobile number.
    Number,
    /// The message is empty or too long.
    Message,
    /// Account credentials are empty.
    Credentials,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidSender { sender: Option<String> },
    NoRecipients,
    InvalidNumber { number: String },
    EmptyMessage,
    MessageTooLong { length: usize, max: usize },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::Empty { .. } => ValidationErrorKind::Credentials,
            Self::InvalidSender { .. } => ValidationErrorKind::Sender,
            Self::NoRecipients | Self::InvalidNumber { .. } => ValidationErrorKind::Number,
            Self::EmptyMessage | Self::MessageTooLong { .. } => ValidationErrorKind::Message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidSender { sender } => {
                write!(
                    f,
                    "message sender `{}` is invalid",
                    sender.as_deref().unwrap_or_default()
                )
            }
            Self::NoRecipients => write!(f, "no `to` number(s)"),
            Self::InvalidNumber { number } => {
                write!(f, "message to number `{number}` is invalid")
            }
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::MessageTooLong { length, max } => write!(
                f,
                "message length `{length}` of chars is over maximum length of `{max}` chars"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{ValidationError, ValidationErrorKind};

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "username" };
        assert_eq!(err.to_string(), "username must not be empty");

        let err = ValidationError::InvalidSender { sender: None };
        assert_eq!(err.to_string(), "message sender `` is invalid");

        let err = ValidationError::InvalidNumber {
            number: "041234567".to_owned(),
        };
        assert_eq!(err.to_string(), "message to number `041234567` is invalid");

        let err = ValidationError::MessageTooLong {
            length: 1000,
            max: 765,
        };
        assert_eq!(
            err.to_string(),
            "message length `1000` of chars is over maximum length of `765` chars"
        );
    }

    #[test]
    fn kinds_group_variants() {
        assert_eq!(
            ValidationError::InvalidSender {
                sender: Some("a b".to_owned())
            }
            .kind(),
            ValidationErrorKind::Sender
        );
        assert_eq!(
            ValidationError::NoRecipients.kind(),
            ValidationErrorKind::Number
        );
        assert_eq!(
            ValidationError::EmptyMessage.kind(),
            ValidationErrorKind::Message
        );
        assert_eq!(
            ValidationError::Empty { field: "password" }.kind(),
            ValidationErrorKind::Credentials
        );
    }
}
