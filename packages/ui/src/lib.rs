//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod state;
pub use state::{use_api, use_services, use_user_state, StoreHandle, StoreProvider};

mod header;
pub use header::AppHeader;

mod page_loader;
pub use page_loader::PageLoader;

mod service_card;
pub use service_card::ServiceCard;

mod filter_form;
pub use filter_form::ServiceFilterForm;

mod worker_toggle;
pub use worker_toggle::WorkerToggle;
