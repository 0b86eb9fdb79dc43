use dioxus::prelude::*;
use shared::Integration;

use crate::components::StatusIndicator;

#[component]
pub fn IntegrationRow(
    integration: Integration,
    #[props(!optional)] has_token: Option<bool>,
) -> Element {
    let label = integration.label();

    rsx! {
      div { class: "flex justify-between items-center py-3 border-b border-white/5 font-mono text-sm",
        span { class: "text-gray-300", "{label}: " }
        StatusIndicator { ok: has_token }
      }
    }
}
