//! Resolves shortened links by following `Location` headers by hand.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url, header, redirect};
use tracing::{debug, trace};

use super::{DEFAULT_TIMEOUT_SECS, USER_AGENT, map_request_error};
use crate::domain::errors::EmbedError;
use crate::domain::ports::RedirectPort;

/// Longest redirect chain followed before giving up on the rest.
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Redirect resolver backed by reqwest with automatic redirects disabled.
pub struct HttpRedirectClient {
    client: Client,
    max_hops: usize,
}

impl HttpRedirectClient {
    /// Creates new client with the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, EmbedError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates client with a custom timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, EmbedError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::none())
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| EmbedError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            max_hops: MAX_REDIRECT_HOPS,
        })
    }

    /// Next hop of `url`, if the server answers with a redirect.
    async fn next_hop(&self, url: &Url) -> Result<Option<Url>, EmbedError> {
        let mut response = self
            .client
            .request(Method::HEAD, url.clone())
            .send()
            .await
            .map_err(|e| map_request_error(&e))?;

        if matches!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED
        ) {
            trace!(url = %url, "HEAD not supported, retrying with GET");
            response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| map_request_error(&e))?;
        }

        let status = response.status();
        if !status.is_redirection() {
            return Ok(None);
        }

        let Some(location) = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
        else {
            debug!(url = %url, status = %status, "Redirect without Location header");
            return Ok(None);
        };

        url.join(location)
            .map(Some)
            .map_err(|e| EmbedError::redirect(url.as_str(), format!("bad Location header: {e}")))
    }
}

#[async_trait]
impl RedirectPort for HttpRedirectClient {
    async fn redirect_location(&self, link: &str) -> Result<Option<String>, EmbedError> {
        let mut current =
            Url::parse(link).map_err(|e| EmbedError::invalid_url(link, e.to_string()))?;
        let mut redirected = false;

        for _ in 0..self.max_hops {
            match self.next_hop(&current).await {
                Ok(Some(next)) => {
                    trace!(from = %current, to = %next, "Followed redirect");
                    current = next;
                    redirected = true;
                }
                Ok(None) => break,
                Err(e) if redirected => {
                    debug!(error = %e, "Stopping redirect chain early");
                    break;
                }
                Err(e) => return Err(EmbedError::redirect(link, e.to_string())),
            }
        }

        Ok(redirected.then(|| current.to_string()))
    }
}
