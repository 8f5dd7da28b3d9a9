use std::sync::LazyLock;

use regex::Regex;

use crate::domain::validation::ValidationError;

/// Maximum length of an unsplit message, in characters.
pub const MESSAGE_MAX_LENGTH_STANDARD: usize = 160;
/// Maximum number of concatenated parts a split message may use.
pub const MESSAGE_MAX_SPLIT: u8 = 5;
/// Maximum length of a split message, in characters.
pub const MESSAGE_MAX_LENGTH_SPLIT: usize = 765;
/// Maximum length of a sender id, in characters.
pub const SENDER_MAX_LENGTH: usize = 11;

// SMS Broadcast only delivers to Australian mobiles.
static VALID_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:614|04|4)[0-9]{8}$").expect("Invalid number regex"));

/// Optional parameters of a send.
///
/// `Default` enables splitting (`maxsplit=5`) and leaves everything else unset,
/// in which case the client's default sender is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOptions {
    /// Sender id (`from`). Overrides the client default when set.
    pub sender: Option<String>,
    /// Caller reference (`ref`), echoed back per recipient.
    pub reference: Option<String>,
    /// Allow the message to span up to [`MESSAGE_MAX_SPLIT`] parts.
    pub split: bool,
    /// Minutes to defer sending. `Some(0)` is treated as no delay.
    pub delay: Option<u32>,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            sender: None,
            reference: None,
            split: true,
            delay: None,
        }
    }
}

/// A single outbound send, possibly to several recipients.
///
/// Construction never fails; call [`SendRequest::validate`] before putting it
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    recipients: Vec<String>,
    message: String,
    options: SendOptions,
}

impl SendRequest {
    pub fn new(recipients: Vec<String>, message: impl Into<String>, options: SendOptions) -> Self {
        Self {
            recipients,
            message: message.into(),
            options,
        }
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }

    /// Longest message this request accepts, given its split flag.
    pub fn max_message_length(&self) -> usize {
        if self.options.split {
            MESSAGE_MAX_LENGTH_SPLIT
        } else {
            MESSAGE_MAX_LENGTH_STANDARD
        }
    }

    /// Check the request against the provider's constraints.
    ///
    /// Checks run in order sender, recipients, message and stop at the first
    /// failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let sender = self.options.sender.as_deref();
        if !sender.is_some_and(is_valid_sender) {
            return Err(ValidationError::InvalidSender {
                sender: sender.map(str::to_owned),
            });
        }

        if self.recipients.is_empty() {
            return Err(ValidationError::NoRecipients);
        }
        if let Some(number) = self.recipients.iter().find(|it| !is_valid_number(it)) {
            return Err(ValidationError::InvalidNumber {
                number: number.clone(),
            });
        }

        if self.message.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        let length = self.message.chars().count();
        let max = self.max_message_length();
        if length > max {
            return Err(ValidationError::MessageTooLong { length, max });
        }

        Ok(())
    }
}

/// Whether `number` is an Australian mobile number in a format SMS Broadcast accepts.
pub fn is_valid_number(number: &str) -> bool {
    VALID_NUMBER.is_match(number)
}

/// Whether `sender` is 1 to 11 non-whitespace characters.
pub fn is_valid_sender(sender: &str) -> bool {
    let length = sender.chars().count();
    (1..=SENDER_MAX_LENGTH).contains(&length) && !sender.chars().any(char::is_whitespace)
}
