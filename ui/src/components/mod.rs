mod integration_row;
mod loading;
mod notice;
mod status;

pub use integration_row::IntegrationRow;
pub use loading::LoadingIndicator;
pub use notice::{ErrorNotice, RedirectNotice};
pub use status::{Indicator, StatusIndicator};
