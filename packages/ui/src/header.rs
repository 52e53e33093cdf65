use dioxus::prelude::*;

use crate::icons::FaFileContract;
use crate::state::use_user_state;
use crate::Icon;
use store::Dispatch;

/// Persistent header: title, auth link and contracts link.
#[component]
pub fn AppHeader(title: String) -> Element {
    let user = use_user_state();
    let is_authorized = user.select(|u| u.is_authorized);

    rsx! {
        div {
            class: "app__header",
            h1 { class: "app__title", "{title}" }
            Link {
                to: "/auth",
                class: "app__button",
                if is_authorized { "Выйти" } else { "Авторизация" }
            }
            Link {
                to: "/contract-signing",
                class: "app__contracts-link",
                Icon { icon: FaFileContract, width: 28, height: 28, class: "app__contracts" }
            }
        }
    }
}
