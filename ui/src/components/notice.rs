use dioxus::prelude::*;

use crate::controller::RedirectOutcome;

#[component]
pub fn ErrorNotice(#[props(into)] title: String, #[props(into)] message: String) -> Element {
    rsx! {
      div { class: "p-3 bg-red-500/10 border border-red-500/50 rounded text-red-400 text-sm font-mono",
        p { class: "font-bold", "{title}" }
        p { "{message}" }
      }
    }
}

/// Explains why the page is not on its way to Fitbit, if it should have been.
#[component]
pub fn RedirectNotice(redirect: RedirectOutcome) -> Element {
    match redirect {
        RedirectOutcome::NotNeeded => rsx! {},
        RedirectOutcome::Navigated(_) => rsx! {
          p { class: "mt-4 text-xs text-gray-500 font-mono animate-pulse", "Redirecting to Fitbit..." }
        },
        RedirectOutcome::Unavailable(e) => rsx! {
          ErrorNotice { title: "Cannot start Fitbit authorization", message: e.to_string() }
        },
        RedirectOutcome::Rejected { url, reason } => rsx! {
          ErrorNotice { title: "Redirect to Fitbit failed", message: reason }
          a { class: "mt-2 block text-xs underline text-gray-400", href: "{url}", "Authorize Fitbit manually" }
        },
    }
}
