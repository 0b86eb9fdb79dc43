use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
      div { class: "flex flex-col items-center justify-center py-12",
        div { class: "animate-spin rounded-full h-10 w-10 border-t-4 border-b-4 border-teal-500 mb-4" }
        p { class: "text-sm font-mono text-teal-500 animate-pulse", "Loading..." }
      }
    }
}
