//! Types shared between the HTTP client and the UI: the authorization snapshot returned by
//! `/api/authstate` and the builder for the Fitbit authorization redirect.

pub mod auth_state;
pub mod authorize;

pub use auth_state::{AuthSnapshot, Integration, ServiceAuthState};
pub use authorize::{authorize_url, AuthorizeUrlError, FITBIT_AUTHORIZE_URL};
