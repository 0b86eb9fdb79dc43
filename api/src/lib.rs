pub mod client;
pub mod config;
pub mod error;

pub use client::{parse_auth_state, AuthStateClient, AuthStateSource};
pub use config::AppConfig;
pub use error::{ApiError, Result};
