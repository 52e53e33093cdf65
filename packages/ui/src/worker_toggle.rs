use dioxus::prelude::*;
use store::ListingMode;

/// Switch between other workers' services and the worker's own.
#[component]
pub fn WorkerToggle(mode: ListingMode, on_change: EventHandler<ListingMode>) -> Element {
    let option_class = |option: ListingMode| {
        if option == mode {
            "main-page__workerInterface-option main-page__workerInterface-option--active"
        } else {
            "main-page__workerInterface-option"
        }
    };

    rsx! {
        div {
            class: "main-page__workerInterface",
            div {
                class: option_class(ListingMode::Available),
                onclick: move |_| on_change.call(ListingMode::Available),
                "Доступные услуги"
            }
            div {
                class: option_class(ListingMode::Mine),
                onclick: move |_| on_change.call(ListingMode::Mine),
                "Мои услуги"
            }
        }
    }
}
