//! Auth page: current session and logout.

use dioxus::prelude::*;
use store::logout_action;
use ui::{use_api, use_user_state, PageLoader};

#[component]
pub fn AuthPage() -> Element {
    let user = use_user_state();
    let client = use_api();
    let state = user.snapshot();

    let signed_in_as = state
        .user
        .as_ref()
        .filter(|_| state.is_authorized)
        .map(|u| u.display_name().to_string());

    let handle_logout = move |_| {
        let client = client.clone();
        let mut store = user;
        async move {
            logout_action(&mut store, &client).await;
        }
    };

    rsx! {
        div {
            class: "auth-page",
            PageLoader { statuses: vec![state.get_user_status] }

            if let Some(name) = signed_in_as {
                h2 { class: "auth-page__title", "Вы вошли как {name}" }
                button {
                    class: "auth-page__button",
                    onclick: handle_logout,
                    "Выйти"
                }
            } else {
                h2 { class: "auth-page__title", "Авторизация" }
                p { class: "auth-page__hint", "Войдите в аккаунт PROFI.ru, чтобы размещать услуги и заключать договоры." }
            }
        }
    }
}
