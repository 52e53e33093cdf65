use dioxus::prelude::*;
use store::ServiceListing;

use crate::icons::FaPen;
use crate::Icon;

/// Card for one listing in the main grid.
#[component]
pub fn ServiceCard(service: ServiceListing, #[props(default)] can_edit: bool) -> Element {
    rsx! {
        div {
            class: "service-card",
            if let Some(image) = &service.image {
                img { class: "service-card__image", src: "{image}", alt: "{service.title}" }
            }
            div {
                class: "service-card__body",
                h3 { class: "service-card__title", "{service.title}" }
                if let Some(description) = &service.description {
                    p { class: "service-card__description", "{description}" }
                }
                span { class: "service-card__price", "{service.price} руб." }
            }
            if can_edit {
                span {
                    class: "service-card__edit",
                    title: "Редактировать",
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
            }
        }
    }
}
