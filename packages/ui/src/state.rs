//! Store context and hooks for the UI.
//!
//! [`StoreProvider`] owns one signal per store slice plus the backend client and puts
//! them in context. Components reach them through [`use_services`],
//! [`use_user_state`] and [`use_api`].

use api::HttpServicesApi;
use dioxus::prelude::*;
use store::{ApiConfig, Dispatch, Reducer, ServicesState, UserState};

/// A store slice held in a signal.
///
/// Implements [`Dispatch`], so the async actions from the `store` crate run directly
/// against it. Reads through [`Dispatch::select`] or [`StoreHandle::snapshot`]
/// subscribe the calling component.
pub struct StoreHandle<S: 'static> {
    signal: Signal<S>,
}

impl<S: 'static> Clone for StoreHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for StoreHandle<S> {}

impl<S: 'static> StoreHandle<S> {
    pub fn new(signal: Signal<S>) -> Self {
        Self { signal }
    }

    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.signal.read().clone()
    }
}

impl<S: Reducer + 'static> Dispatch<S> for StoreHandle<S> {
    fn dispatch(&mut self, action: S::Action) {
        self.signal.write().reduce(action);
    }

    fn select<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&*self.signal.read())
    }
}

pub fn use_services() -> StoreHandle<ServicesState> {
    use_context::<StoreHandle<ServicesState>>()
}

pub fn use_user_state() -> StoreHandle<UserState> {
    use_context::<StoreHandle<UserState>>()
}

pub fn use_api() -> HttpServicesApi {
    use_context::<HttpServicesApi>()
}

/// Provider component for the store slices and the backend client.
/// Restores the current session once on mount.
#[component]
pub fn StoreProvider(config: ApiConfig, children: Element) -> Element {
    let services = use_signal(ServicesState::default);
    let user = use_signal(UserState::default);

    let client = use_context_provider(|| HttpServicesApi::new(&config));
    use_context_provider(|| StoreHandle::new(services));
    let user_store = use_context_provider(|| StoreHandle::new(user));

    use_hook(move || {
        let mut user_store = user_store;
        spawn(async move {
            store::ensure_current_user(&mut user_store, &client).await;
        });
    });

    rsx! {
        {children}
    }
}
