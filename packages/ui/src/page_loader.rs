use dioxus::prelude::*;
use store::FetchStatus;

use crate::icons::FaSpinner;
use crate::Icon;

/// Full-page spinner, visible while any of `statuses` is loading.
#[component]
pub fn PageLoader(statuses: Vec<FetchStatus>) -> Element {
    if !store::is_loading(&statuses) {
        return rsx! {};
    }

    rsx! {
        div {
            class: "page-loader",
            role: "status",
            Icon { icon: FaSpinner, width: 48, height: 48, class: "page-loader__spinner" }
        }
    }
}
