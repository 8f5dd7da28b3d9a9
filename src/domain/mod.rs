//! Domain layer: request/response types and validation rules (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    MESSAGE_MAX_LENGTH_SPLIT, MESSAGE_MAX_LENGTH_STANDARD, MESSAGE_MAX_SPLIT, SENDER_MAX_LENGTH,
    SendOptions, SendRequest, is_valid_number, is_valid_sender,
};
pub use response::{ResponseCode, SendResponse};
pub use validation::{ValidationError, ValidationErrorKind};
pub use value::{Password, Username};
