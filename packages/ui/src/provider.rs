//! Shared API client context.

use api::{ApiClient, ClientConfig};
use dioxus::prelude::*;

/// What [`ApiProvider`] puts in context.
#[derive(Clone)]
pub struct ApiContext {
    pub client: ApiClient,
    pub config: ClientConfig,
}

/// The client every view talks to the backend through.
pub fn use_api() -> ApiClient {
    use_context::<ApiContext>().client
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ApiContext>().config
}

/// Provider component that builds the API client from `config`.
/// Wrap your app with this component before rendering any view.
#[component]
pub fn ApiProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(|| {
        tracing::info!("API base URL: {}", config.api.base_url);
        ApiContext {
            client: ApiClient::from_config(&config),
            config: config.clone(),
        }
    });

    rsx! {
        {children}
    }
}
