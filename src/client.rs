use crate::models::{ErrorBody, LedgerState};
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

/// Failure of a remote scoreboard operation. The caller's last known state
/// is never touched by a failed call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the four scoreboard operations over HTTP+JSON. Every
/// successful response carries the full resulting ledger state; the server
/// is the source of truth.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub async fn state(&self) -> Result<LedgerState, ApiError> {
        let response = self.client.get(self.url("/api/state")).send().await?;
        decode(response).await
    }

    /// Registers `winner_key` as this week's winner. The key is validated by
    /// the server, so an unknown key comes back as a 400 `ApiError::Api`.
    pub async fn register(&self, winner_key: &str) -> Result<LedgerState, ApiError> {
        let response = self
            .client
            .post(self.url("/api/register"))
            .json(&serde_json::json!({ "winner": winner_key }))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn undo(&self) -> Result<LedgerState, ApiError> {
        let response = self.client.post(self.url("/api/undo")).send().await?;
        decode(response).await
    }

    pub async fn reset(&self) -> Result<LedgerState, ApiError> {
        let response = self.client.post(self.url("/api/reset")).send().await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn decode(response: Response) -> Result<LedgerState, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {status}"),
        };
        return Err(ApiError::Api { status, message });
    }

    Ok(response.json::<LedgerState>().await?)
}
