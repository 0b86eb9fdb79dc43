//! State of the status page and the one-shot load that drives it.
//!
//! The page starts in [`PageState::Loading`] and moves exactly once, either to
//! [`PageState::Loaded`] with the snapshot returned by the backend or to
//! [`PageState::Failed`]. When Fitbit is not authorized the load also sends the browser
//! to the Fitbit authorization page.

use api::AuthStateSource;
use dioxus::logger::tracing::{info, warn};
use shared::{authorize_url, AuthSnapshot, AuthorizeUrlError, Integration};

use crate::navigator::PageNavigator;

/// What happened with the Fitbit authorization redirect after a successful load.
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectOutcome {
    /// Fitbit already has a token.
    NotNeeded,
    /// The browser was sent to this URL.
    Navigated(String),
    /// The snapshot lacks what is needed to build the URL.
    Unavailable(AuthorizeUrlError),
    /// The URL was built but the browser refused to navigate.
    Rejected { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageState {
    #[default]
    Loading,
    Loaded {
        snapshot: AuthSnapshot,
        redirect: RedirectOutcome,
    },
    Failed(String),
}

/// One rendered status row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusRow {
    pub integration: Integration,
    pub has_token: Option<bool>,
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn snapshot(&self) -> Option<&AuthSnapshot> {
        match self {
            PageState::Loaded { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    /// Rows to display, in [`Integration::ALL`] order. Empty until the snapshot is loaded.
    pub fn rows(&self) -> Vec<StatusRow> {
        let Some(snapshot) = self.snapshot() else {
            return Vec::new();
        };
        Integration::ALL
            .into_iter()
            .map(|integration| StatusRow {
                integration,
                has_token: snapshot.has_token(integration),
            })
            .collect()
    }
}

/// Fetch the snapshot once and settle the page state.
pub async fn load_page<S, N>(source: &S, navigator: &N, authorize_endpoint: &str) -> PageState
where
    S: AuthStateSource + ?Sized,
    N: PageNavigator + ?Sized,
{
    info!("Requesting auth state");
    let result = source.fetch_auth_state().await;
    apply_fetch_result(result, navigator, authorize_endpoint)
}

/// Settle the page state from the fetch result, redirecting to Fitbit if it lacks a token.
pub fn apply_fetch_result<N>(
    result: api::Result<AuthSnapshot>,
    navigator: &N,
    authorize_endpoint: &str,
) -> PageState
where
    N: PageNavigator + ?Sized,
{
    let snapshot = match result {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Failed to fetch auth state: {e}");
            return PageState::Failed(e.to_string());
        }
    };

    let redirect = if snapshot.is_authorized(Integration::Fitbit) {
        RedirectOutcome::NotNeeded
    } else {
        redirect_to_authorize(&snapshot, navigator, authorize_endpoint)
    };

    PageState::Loaded { snapshot, redirect }
}

fn redirect_to_authorize<N>(
    snapshot: &AuthSnapshot,
    navigator: &N,
    authorize_endpoint: &str,
) -> RedirectOutcome
where
    N: PageNavigator + ?Sized,
{
    let url = match authorize_url(authorize_endpoint, snapshot) {
        Ok(url) => url,
        Err(e) => {
            warn!("Cannot start Fitbit authorization: {e}");
            return RedirectOutcome::Unavailable(e);
        }
    };

    info!("Fitbit has no token, redirecting to {url}");
    match navigator.navigate(&url) {
        Ok(()) => RedirectOutcome::Navigated(url),
        Err(e) => {
            warn!("Navigation to Fitbit authorization failed: {e}");
            RedirectOutcome::Rejected {
                url,
                reason: e.to_string(),
            }
        }
    }
}
