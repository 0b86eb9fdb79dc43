use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::AuthSnapshot;
use tracing::{debug, error};
use url::Url;

use crate::{
    config::AppConfig,
    error::{ApiError, Result},
};

/// Anything that can produce the authorization snapshot.
///
/// Futures are not `Send`: in the browser the HTTP client is bound to the JS event loop.
#[async_trait(?Send)]
pub trait AuthStateSource {
    async fn fetch_auth_state(&self) -> Result<AuthSnapshot>;
}

/// Fetches the snapshot from `GET /api/authstate` with default headers and no body.
#[derive(Debug, Clone)]
pub struct AuthStateClient {
    url: Url,
    client: Client,
}

impl AuthStateClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            url: config.auth_state_url()?,
            client: Client::new(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn handle_response(response: Response) -> Result<AuthSnapshot> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        parse_auth_state(status, &text)
    }
}

#[async_trait(?Send)]
impl AuthStateSource for AuthStateClient {
    async fn fetch_auth_state(&self) -> Result<AuthSnapshot> {
        debug!("Request: GET {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;
        Self::handle_response(response).await
    }
}

/// Turns a raw response into a snapshot. Non-2xx statuses and bodies that are not a
/// JSON object are errors.
pub fn parse_auth_state(status: u16, body: &str) -> Result<AuthSnapshot> {
    if !(200..300).contains(&status) {
        let message = match body.trim() {
            "" => "empty response body".to_string(),
            text => text.to_string(),
        };
        error!("Auth state error: {status} - {message}");
        return Err(ApiError::Status { status, message });
    }

    serde_json::from_str(body).map_err(|e| {
        error!("Deserialization error: {e} for text: {body}");
        ApiError::Decode {
            status,
            message: format!("JSON parse error: {e}"),
        }
    })
}
