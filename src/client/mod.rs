//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod error;
mod http;

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Password, SendOptions, SendRequest, SendResponse, Username, ValidationError};
use crate::transport::{
    BalanceReply, TransportError, decode_balance_response, decode_send_response,
    encode_balance_query, encode_send_query,
};

pub use error::{ProviderError, SendError, SmsBroadcastError};
pub use http::{BoxError, BoxFuture, HttpTransport};

use http::ReqwestTransport;

const DEFAULT_ENDPOINT: &str = "https://api.smsbroadcast.com.au/api-adv.php";
const FACTORY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
/// SMS Broadcast account credentials, sent as `username` and `password` on every call.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create validated credentials. Both parts must be non-empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Username::FIELD.to_owned(), self.username.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsBroadcastClient`].
///
/// Use this when you need to customize the endpoint, timeouts, user-agent, or
/// default sender.
pub struct SmsBroadcastClientBuilder {
    credentials: Credentials,
    endpoint: String,
    sender: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsBroadcastClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            sender: None,
            timeout: None,
            connect_timeout: None,
            user_agent: None,
        }
    }

    /// Override the API endpoint URL. It is parsed when the client is built.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sender id used when a call does not set [`SendOptions::sender`].
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a timeout for establishing the connection.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsBroadcastClient`].
    pub fn build(self) -> Result<SmsBroadcastClient, SmsBroadcastError> {
        let endpoint = url::Url::parse(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsBroadcastError::HttpClient(Box::new(err)))?;

        Ok(SmsBroadcastClient {
            credentials: self.credentials,
            endpoint: endpoint.into(),
            sender: self.sender,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SMS Broadcast client.
///
/// The client holds only immutable configuration and can be cloned and shared
/// across tasks freely.
///
/// Per-recipient failures are handled differently by the two send methods:
/// [`send`](Self::send) turns an `ERROR`/`BAD` reply into
/// [`SendError::Rejected`], while [`send_many`](Self::send_many) returns every
/// line as a [`SendResponse`] and leaves inspection to the caller.
pub struct SmsBroadcastClient {
    credentials: Credentials,
    endpoint: String,
    sender: Option<String>,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for SmsBroadcastClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsBroadcastClient")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

impl SmsBroadcastClient {
    /// Create a client using the default endpoint and no default sender.
    ///
    /// For more customization, use [`SmsBroadcastClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            sender: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client with 5 second connect and request timeouts.
    pub fn create(
        username: impl Into<String>,
        password: impl Into<String>,
        sender: Option<&str>,
    ) -> Result<Self, SmsBroadcastError> {
        let mut builder = Self::builder(Credentials::new(username, password)?)
            .timeout(FACTORY_TIMEOUT)
            .connect_timeout(FACTORY_TIMEOUT);
        if let Some(sender) = sender {
            builder = builder.sender(sender);
        }
        builder.build()
    }

    /// Create a client that issues requests through `http` instead of reqwest.
    pub fn with_transport(
        credentials: Credentials,
        sender: Option<String>,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            sender,
            http,
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmsBroadcastClientBuilder {
        SmsBroadcastClientBuilder::new(credentials)
    }

    /// Default sender id, if one was configured.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Send one message to one recipient.
    ///
    /// Errors:
    /// - [`SmsBroadcastError::Validation`] for invalid input (nothing is sent),
    /// - [`SendError::Transport`] when the HTTP call fails,
    /// - [`SendError::Rejected`] when SMS Broadcast answers `ERROR` or `BAD`,
    /// - [`SmsBroadcastError::MalformedResponse`] for an unparseable body.
    pub async fn send(
        &self,
        to: impl Into<String>,
        message: impl Into<String>,
        options: SendOptions,
    ) -> Result<SendResponse, SmsBroadcastError> {
        let to: String = to.into();
        let response = self
            .send_many([to], message, options)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| malformed(TransportError::EmptyBody))?;

        if let Some(error) = &response.error {
            tracing::warn!(code = response.code.as_str(), error = %error, "SMS rejected");
            return Err(SendError::Rejected {
                to: response.to.clone().unwrap_or_default(),
                error: error.clone(),
            }
            .into());
        }

        Ok(response)
    }

    /// Send one message to several recipients in a single request.
    ///
    /// `options.sender` wins over the client's default sender. Results come
    /// back in response line order, which SMS Broadcast keeps aligned with
    /// `recipients`. `ERROR` and `BAD` lines are returned, not raised.
    ///
    /// Errors:
    /// - [`SmsBroadcastError::Validation`] for invalid input (nothing is sent),
    /// - [`SendError::Transport`] when the HTTP call fails,
    /// - [`SmsBroadcastError::MalformedResponse`] for an unparseable body.
    pub async fn send_many<I>(
        &self,
        recipients: I,
        message: impl Into<String>,
        mut options: SendOptions,
    ) -> Result<Vec<SendResponse>, SmsBroadcastError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if options.sender.is_none() {
            options.sender = self.sender.clone();
        }
        let request = SendRequest::new(
            recipients.into_iter().map(Into::into).collect(),
            message,
            options,
        );
        request.validate()?;

        let mut params = encode_send_query(&request);
        self.credentials.push_query_params(&mut params);

        tracing::debug!(
            endpoint = %self.endpoint,
            recipients = request.recipients().len(),
            split = request.options().split,
            "sending SMS"
        );

        let body = self
            .http
            .get_query(&self.endpoint, params)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "SMS send request failed");
                SendError::Transport(err)
            })?;

        let responses = decode_send_response(&body).map_err(malformed)?;
        tracing::debug!(results = responses.len(), "parsed send response");
        Ok(responses)
    }

    /// Fetch the remaining message credits on the account.
    ///
    /// Errors:
    /// - [`ProviderError::Transport`] when the HTTP call fails,
    /// - [`ProviderError::Rejected`] when the body contains `ERROR`,
    /// - [`SmsBroadcastError::MalformedResponse`] for an unparseable body.
    pub async fn get_balance(&self) -> Result<u64, SmsBroadcastError> {
        let mut params = encode_balance_query();
        self.credentials.push_query_params(&mut params);

        tracing::debug!(endpoint = %self.endpoint, "fetching balance");

        let body = self
            .http
            .get_query(&self.endpoint, params)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "balance request failed");
                ProviderError::Transport(err)
            })?;

        match decode_balance_response(&body).map_err(malformed)? {
            BalanceReply::Balance(balance) => Ok(balance),
            BalanceReply::Rejected(body) => {
                tracing::warn!(body = %body, "balance rejected");
                Err(ProviderError::Rejected { body }.into())
            }
        }
    }
}

fn malformed(err: TransportError) -> SmsBroadcastError {
    SmsBroadcastError::MalformedResponse(Box::new(err))
}
