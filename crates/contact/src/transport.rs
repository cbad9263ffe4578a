use std::sync::Arc;

use async_trait::async_trait;
pub use reqwest::StatusCode;
use url::Url;

use crate::{CONTACT_ENDPOINT, ContactMessage};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid contact endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failure of a transport that has no reqwest error to wrap
    #[error("{0}")]
    Other(String),
}

/// Sends a contact message somewhere and reports the response status.
///
/// Only the status is returned; response bodies are never read.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<StatusCode, TransportError>;
}

#[async_trait]
impl<T: ContactTransport + ?Sized> ContactTransport for Arc<T> {
    async fn deliver(&self, message: &ContactMessage) -> Result<StatusCode, TransportError> {
        (**self).deliver(message).await
    }
}

/// JSON-over-HTTP transport posting to `/api/contact`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Resolves the fixed endpoint path against the site origin.
    pub fn for_origin(origin: &str) -> Result<Self, TransportError> {
        let endpoint = Url::parse(origin)?.join(CONTACT_ENDPOINT)?;

        Ok(Self::new(endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn deliver(&self, message: &ContactMessage) -> Result<StatusCode, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(message)
            .send()
            .await?;

        Ok(response.status())
    }
}
