//! Detail page for a single listing.

use dioxus::prelude::*;
use store::{fetch_service, FetchStatus, ServiceId};
use ui::{use_api, PageLoader};

use crate::Route;

#[component]
pub fn ServicePage(id: ServiceId) -> Element {
    // Track the id in a signal so the lookup re-runs on route param change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let client = use_api();

    // Only the id is read here, so the fetch re-runs on navigation and nothing else
    let lookup = use_resource(move || {
        let client = client.clone();
        let id = id_signal();
        async move { fetch_service(&client, id).await }
    });

    let current = lookup.cloned();

    match current {
        None => rsx! {
            PageLoader { statuses: vec![FetchStatus::Loading] }
        },
        Some(None) => rsx! {
            div {
                class: "service-page",
                p { class: "service-page__missing", "Услуга не найдена" }
                Link { to: Route::MainPage {}, class: "service-page__back", "К списку услуг" }
            }
        },
        Some(Some(service)) => rsx! {
            div {
                class: "service-page",
                if let Some(image) = &service.image {
                    img { class: "service-page__image", src: "{image}", alt: "{service.title}" }
                }
                h2 { class: "service-page__title", "{service.title}" }
                p { class: "service-page__price", "{service.price} руб." }
                if let Some(description) = &service.description {
                    p { class: "service-page__description", "{description}" }
                }
                p { class: "service-page__owner", "Исполнитель №{service.user}" }
                Link { to: Route::MainPage {}, class: "service-page__back", "К списку услуг" }
            }
        },
    }
}
