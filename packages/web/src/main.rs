use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::{MarketConfig, ServiceId};
use ui::{AppHeader, StoreProvider};
use views::{AuthPage, ContractSigningPage, MainPage, ServiceCreatePage, ServicePage};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        MainPage {},
        #[route("/auth")]
        AuthPage {},
        #[route("/service/create")]
        ServiceCreatePage {},
        #[route("/service/:id")]
        ServicePage { id: ServiceId },
        #[route("/contract-signing")]
        ContractSigningPage {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const MARKET_TOML: &str = include_str!("../market.toml");

fn main() {
    let (config, config_error) = match MarketConfig::from_toml(MARKET_TOML) {
        Ok(config) => (config, None),
        Err(e) => (MarketConfig::default(), Some(e)),
    };

    let level = config.app.log_level.parse().unwrap_or(Level::INFO);
    dioxus::logger::init(level).expect("logger initialised twice");

    if let Some(e) = config_error {
        tracing::error!("Invalid {}, using defaults: {}", MarketConfig::filename(), e);
    }
    tracing::info!(api = %config.api.base_url, "starting front end");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<MarketConfig>();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        StoreProvider {
            config: config.api.clone(),
            Router::<Route> {}
        }
    }
}

/// Header above every page.
#[component]
fn AppShell() -> Element {
    let config = use_context::<MarketConfig>();

    rsx! {
        div {
            class: "app",
            AppHeader { title: config.app.title.clone() }
            Outlet::<Route> {}
        }
    }
}

/// Unknown paths keep the header and render nothing below it.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    use_hook(|| {
        tracing::warn!(path = %format!("/{}", segments.join("/")), "no route matched");
    });
    rsx! {}
}
