//! Status page UI: which integrations hold a token, and the redirect into Fitbit's
//! authorization flow when Fitbit does not.

mod layout;
pub use layout::Layout;

mod auth_status;
pub use auth_status::AuthStatusPage;

pub mod controller;
pub mod navigator;

mod components;
pub use components::*;
