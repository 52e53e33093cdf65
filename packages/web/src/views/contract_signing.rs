use dioxus::prelude::*;
use store::Dispatch;
use ui::use_user_state;

#[component]
pub fn ContractSigningPage() -> Element {
    let is_authorized = use_user_state().select(|u| u.is_authorized);

    rsx! {
        div {
            class: "contracts-page",
            h2 { "Договоры" }
            if !is_authorized {
                p { class: "contracts-page__hint", "Договоры доступны после входа в аккаунт." }
            }
        }
    }
}
