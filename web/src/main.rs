use api::AppConfig;
use dioxus::prelude::*;

use ui::{navigator::page_origin, AuthStatusPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = app_config();

    #[cfg(feature = "web")]
    {
        let web = dioxus::web::Config::new().rootname(config.mount_id().to_string());
        dioxus::LaunchBuilder::new()
            .with_cfg(web)
            .with_context(config)
            .launch(App);
    }

    #[cfg(not(feature = "web"))]
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// Talk to the backend that served the page; fall back to the local default elsewhere.
fn app_config() -> AppConfig {
    match page_origin() {
        Some(origin) => AppConfig::default().with_origin(origin),
        None => AppConfig::default(),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Fitsync" }

        AuthStatusPage {}
    }
}
