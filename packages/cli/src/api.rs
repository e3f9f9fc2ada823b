use async_trait::async_trait;
use common::{ClassifyRequest, ClassifyResponse, ErrorBody};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Sends one submission to the classification gateway.
#[async_trait]
pub trait ClassifyApi: Send + Sync {
    /// Returns the raw delimiter-separated result.
    async fn classify(&self, code: &str) -> Result<String, ClientError>;
}

/// HTTP client for `POST /classify`.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/classify", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ClassifyApi for GatewayClient {
    async fn classify(&self, code: &str) -> Result<String, ClientError> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(&ClassifyRequest::new(code))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            // Error bodies are informative only; never fail on their shape.
            let message = match res.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: ClassifyResponse = res.json().await.map_err(ClientError::Decode)?;
        Ok(body.problem_name)
    }
}
