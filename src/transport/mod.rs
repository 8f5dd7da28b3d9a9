//! Transport layer: query encoding and the plain-text response grammar.

mod balance;
mod send;

pub use balance::{BalanceReply, decode_balance_response, encode_balance_query};
pub use send::{decode_send_response, encode_send_query};

const FIELD_DELIMITER: char = ':';
const ERROR_MARKER: &str = "ERROR";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("response contains no result lines")]
    EmptyBody,

    #[error("response line `{line}` has {found} field(s), expected {expected}")]
    MissingFields {
        line: String,
        expected: usize,
        found: usize,
    },

    #[error("balance `{value}` is not a non-negative integer: {source}")]
    InvalidBalance {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
