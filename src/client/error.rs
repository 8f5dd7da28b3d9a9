use crate::domain::ValidationError;

use super::http::BoxError;

#[derive(Debug, thiserror::Error)]
/// Failure of a send.
pub enum SendError {
    /// The HTTP call itself failed (DNS, TLS, timeouts, non-2xx status).
    #[error("failed to send SMS: {0}")]
    Transport(#[source] BoxError),

    /// SMS Broadcast answered `ERROR` or `BAD` for a single-recipient send.
    ///
    /// `to` is empty when the provider did not name a recipient.
    #[error("failed to send message to `{to}` with error `{error}`")]
    Rejected { to: String, error: String },
}

#[derive(Debug, thiserror::Error)]
/// Failure of a balance lookup.
pub enum ProviderError {
    /// The HTTP call itself failed.
    #[error("failed to fetch balance: {0}")]
    Transport(#[source] BoxError),

    /// The response body carried the `ERROR` marker.
    #[error("failed to fetch balance: {body}")]
    Rejected { body: String },
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsBroadcastClient`](super::SmsBroadcastClient).
///
/// Nothing is retried internally; transient failures are the caller's to retry.
pub enum SmsBroadcastError {
    /// Input rejected before any network call.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Send(#[from] SendError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The body did not follow the provider's line grammar.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] BoxError),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] BoxError),
}
