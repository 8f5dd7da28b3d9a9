//! Typed Rust client for the SMS Broadcast (Australia) HTTP API.
//!
//! The crate is split into a domain layer of request/response types and
//! validation rules, a transport layer for the provider's query-string and
//! plain-text wire format, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use smsbroadcast::{SendOptions, SmsBroadcastClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsbroadcast::SmsBroadcastError> {
//!     let client = SmsBroadcastClient::create("user", "password", Some("Acme"))?;
//!     let response = client
//!         .send("0412345678", "hello", SendOptions::default())
//!         .await?;
//!     println!("queued with reference {:?}", response.reference);
//!     println!("credits left: {}", client.get_balance().await?);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, HttpTransport, ProviderError, SendError, SmsBroadcastClient,
    SmsBroadcastClientBuilder, SmsBroadcastError,
};
pub use domain::{
    ResponseCode, SendOptions, SendRequest, SendResponse, ValidationError, ValidationErrorKind,
};
