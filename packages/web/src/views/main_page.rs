//! Main listing page: filter form, worker toggle and the service grid.

use dioxus::prelude::*;
use store::{
    ensure_price_range, ensure_services, get_services_action, reset_services_state, CreateLink,
    Dispatch, ListingMode, MainPageView, ServiceFilter,
};
use ui::icons::FaPlus;
use ui::{
    use_api, use_services, use_user_state, Icon, PageLoader, ServiceCard, ServiceFilterForm,
    WorkerToggle,
};

use crate::Route;

#[component]
pub fn MainPage() -> Element {
    let mut services = use_services();
    let user = use_user_state();
    let client = use_api();
    let mut mode = use_signal(ListingMode::default);

    // Fetch whatever is still Initial; re-runs when a status changes
    let listings_client = client.clone();
    use_effect(move || {
        if services.select(|s| s.get_services_status.is_initial()) {
            let client = listings_client.clone();
            let mut store = services;
            spawn(async move {
                ensure_services(&mut store, &client).await;
            });
        }
    });

    let range_client = client.clone();
    use_effect(move || {
        if services.select(|s| s.get_services_price_range_status.is_initial()) {
            let client = range_client.clone();
            let mut store = services;
            spawn(async move {
                ensure_price_range(&mut store, &client).await;
            });
        }
    });

    use_drop(move || reset_services_state(&mut services));

    let on_filter_submit = move |filter: ServiceFilter| {
        let client = client.clone();
        let mut store = services;
        spawn(async move {
            get_services_action(&mut store, &client, Some(filter)).await;
        });
    };

    let state = services.snapshot();
    let user_state = user.snapshot();
    let view = MainPageView::derive(&state.services, &user_state, mode());

    let create_class = match view.create_link {
        Some(CreateLink { disabled: true }) => {
            "main-page__link main-page__link--create main-page__link--disabled"
        }
        _ => "main-page__link main-page__link--create",
    };

    rsx! {
        div {
            class: "main-page",
            PageLoader { statuses: state.statuses().to_vec() }

            if let Some(range) = state.services_price_range {
                ServiceFilterForm {
                    price_range: range,
                    initial: state.last_filter.clone(),
                    on_submit: on_filter_submit,
                }
            }

            if view.show_toggle {
                WorkerToggle {
                    mode: mode(),
                    on_change: move |next: ListingMode| mode.set(next),
                }
            }

            div {
                class: "main-page__services-wrapper",
                if view.create_link.is_some() {
                    Link {
                        to: Route::ServiceCreatePage {},
                        class: create_class,
                        Icon { icon: FaPlus, width: 32, height: 32 }
                    }
                }
                for service in view.cards.iter() {
                    Link {
                        key: "{service.id}",
                        to: Route::ServicePage { id: service.id },
                        class: "main-page__link",
                        ServiceCard {
                            service: (*service).clone(),
                            can_edit: view.can_edit,
                        }
                    }
                }
            }
        }
    }
}
