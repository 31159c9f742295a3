use api::ClientConfig;
use dioxus::prelude::*;

use ui::ApiProvider;
use views::{Admin, Home, Search, Shell, StudentDashboard};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/search")]
        Search {},
        #[route("/students")]
        StudentDashboard {},
        #[route("/admin")]
        Admin {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../tutorfinder.toml");

fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Embedded `tutorfinder.toml`, with the base URL optionally overridden at build time.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("invalid tutorfinder.toml, using defaults: {e}");
        ClientConfig::default()
    });
    match option_env!("TUTORFINDER_API_BASE") {
        Some(base) if !base.trim().is_empty() => config.with_base_url(base.trim()),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ApiProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Unknown paths go back to the landing page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}
