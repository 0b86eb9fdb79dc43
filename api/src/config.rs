//! Page configuration.
//!
//! Everything the status page needs to know about where it lives and whom it talks to.
//! Built once by the hosting binary and handed down explicitly; nothing is read from the
//! environment.

use shared::FITBIT_AUTHORIZE_URL;
use url::Url;

/// Origin used when no browser location is available.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_AUTH_STATE_PATH: &str = "/api/authstate";
pub const DEFAULT_MOUNT_ID: &str = "app";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Scheme, host and port the backend is served from (default: "http://localhost:8000")
    pub origin: String,
    /// Path of the auth-state endpoint (default: "/api/authstate")
    pub auth_state_path: String,
    /// OAuth authorization endpoint for Fitbit
    pub authorize_endpoint: String,
    /// Id of the DOM element the page mounts into (default: "app")
    pub mount_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            auth_state_path: DEFAULT_AUTH_STATE_PATH.to_string(),
            authorize_endpoint: FITBIT_AUTHORIZE_URL.to_string(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
        }
    }
}

impl AppConfig {
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Absolute URL of the auth-state endpoint.
    pub fn auth_state_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.origin)?.join(&self.auth_state_path)
    }

    pub fn authorize_endpoint(&self) -> &str {
        &self.authorize_endpoint
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }
}
