use api::{AppConfig, AuthStateClient};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::{ErrorNotice, IntegrationRow, LoadingIndicator, RedirectNotice};
use crate::controller::{load_page, PageState};
use crate::navigator::BrowserNavigator;
use crate::Layout;

/// Shows whether Fitbit and Google are authorized, redirecting to Fitbit's authorization
/// page when Fitbit is not.
///
/// Expects an [`AppConfig`] in context. The auth state is requested once, when the page is
/// first rendered.
#[component]
pub fn AuthStatusPage() -> Element {
    let config = use_context::<AppConfig>();

    let page = use_resource(move || {
        let config = config.clone();
        async move {
            match AuthStateClient::new(&config) {
                Ok(client) => {
                    load_page(&client, &BrowserNavigator, config.authorize_endpoint()).await
                }
                Err(e) => {
                    warn!("Invalid auth state endpoint: {e}");
                    PageState::Failed(e.to_string())
                }
            }
        }
    });

    let state = page.read().clone().unwrap_or_default();
    let rows = state
        .rows()
        .into_iter()
        .map(|row| (row.integration.key(), row));

    let body = match state {
        PageState::Loading => rsx! {
          LoadingIndicator {}
        },
        PageState::Failed(message) => rsx! {
          ErrorNotice { title: "Could not load authorization status", message }
        },
        PageState::Loaded { redirect, .. } => rsx! {
          div {
            for (key, row) in rows {
              IntegrationRow {
                key: "{key}",
                integration: row.integration,
                has_token: row.has_token,
              }
            }
          }
          RedirectNotice { redirect }
        },
    };

    rsx! {
      Layout { {body} }
    }
}
