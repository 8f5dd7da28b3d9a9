use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// HTTP capability used by [`SmsBroadcastClient`](super::SmsBroadcastClient).
///
/// Implementations perform a single `GET` with the given query parameters and
/// return the response body. Any failure, including a non-success HTTP status,
/// is reported as an opaque error; the client never inspects status codes.
pub trait HttpTransport: Send + Sync {
    fn get_query<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<String, BoxError>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get_query<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<String, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .query(&params)
                .send()
                .await?
                .error_for_status()?;
            Ok(response.text().await?)
        })
    }
}
