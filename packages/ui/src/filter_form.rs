use dioxus::prelude::*;
use store::{FilterForm, PriceField, PriceRange, ServiceFilter};

/// Title and price filter above the listing grid.
///
/// Price inputs are pulled back into `price_range` when committed (change/blur) and
/// once more on submit.
#[component]
pub fn ServiceFilterForm(
    price_range: PriceRange,
    /// Previously applied filter to prefill the inputs with.
    initial: Option<ServiceFilter>,
    on_submit: EventHandler<ServiceFilter>,
) -> Element {
    let mut form = use_signal(|| {
        initial
            .as_ref()
            .map(FilterForm::from_filter)
            .unwrap_or_default()
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let filter = {
            let mut values = form.write();
            values.correct_all(&price_range);
            values.to_filter()
        };
        on_submit.call(filter);
    };

    let values = form.read().clone();

    rsx! {
        form {
            class: "main-page__filter-row",
            onsubmit: handle_submit,
            input {
                class: "main-page__filter-input",
                r#type: "text",
                placeholder: "Сфера деятельности",
                value: "{values.title}",
                oninput: move |evt: FormEvent| form.write().title = evt.value(),
            }
            input {
                class: "main-page__filter-input",
                r#type: "number",
                placeholder: "Мин. цена {price_range.price_min}руб.",
                value: "{values.price_min}",
                oninput: move |evt: FormEvent| form.write().set_price(PriceField::Min, evt.value()),
                onchange: move |_| {
                    form.write().correct(PriceField::Min, &price_range);
                },
            }
            input {
                class: "main-page__filter-input",
                r#type: "number",
                placeholder: "Макс. цена {price_range.price_max}руб.",
                value: "{values.price_max}",
                oninput: move |evt: FormEvent| form.write().set_price(PriceField::Max, evt.value()),
                onchange: move |_| {
                    form.write().correct(PriceField::Max, &price_range);
                },
            }
            button { r#type: "submit", class: "main-page__filter-button", "Поиск" }
        }
    }
}
