use dioxus::prelude::*;

use api::{BackendConfig, ManifestClient};
use ui::{MarsDash, SessionProvider};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| {
        let config = BackendConfig::from_build_env();
        tracing::info!("Using backend at {}", config.base_url());
        ManifestClient::new(config)
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            backend: client,
            MarsDash {}
        }
    }
}
