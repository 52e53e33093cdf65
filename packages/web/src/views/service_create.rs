use dioxus::prelude::*;
use store::Dispatch;
use ui::use_user_state;

use crate::Route;

/// Entry point for publishing a listing. Anonymous users are sent to sign in.
#[component]
pub fn ServiceCreatePage() -> Element {
    let is_authorized = use_user_state().select(|u| u.is_authorized);

    rsx! {
        div {
            class: "service-create-page",
            h2 { "Новая услуга" }
            if is_authorized {
                p { "Опишите услугу, укажите цену и опубликуйте карточку." }
            } else {
                p { "Чтобы разместить услугу, войдите в аккаунт." }
                Link { to: Route::AuthPage {}, class: "service-create-page__auth", "Авторизация" }
            }
        }
    }
}
