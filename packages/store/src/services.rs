//! # Services slice
//!
//! Holds the listing grid and the price range used by the main page, each with its
//! own [`FetchStatus`].
//!
//! ## Actions
//!
//! | Function | Effect |
//! |----------|--------|
//! | [`get_services_action`] | Always fetches listings with the given filter. Used by filter submission. |
//! | [`get_services_price_range_action`] | Always fetches the price range. |
//! | [`ensure_services`] / [`ensure_price_range`] | Fetch only when the status is still `Initial`. Used on page mount. |
//! | [`reset_services_state`] | Clears listings, price range and statuses. Used on page unmount. |
//! | [`fetch_service`] | One listing by id from the backend. Does not touch the slice. |
//!
//! ## Request tickets
//!
//! Each pending action bumps a per-resource ticket and the async action carries the
//! ticket it was issued. The reducer drops any response whose ticket is no longer
//! current, so a response arriving after a reset, or after a newer request for the
//! same resource, never overwrites fresher state. Tickets survive the reset.
//!
//! Failures only ever show up as [`FetchStatus::Error`]; the error itself is logged
//! and discarded.

use crate::api::ServicesApi;
use crate::dispatch::{Dispatch, Reducer};
use crate::models::{PriceRange, ServiceFilter, ServiceId, ServiceListing};
use crate::status::FetchStatus;

type Ticket = u64;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServicesState {
    pub services: Vec<ServiceListing>,
    pub get_services_status: FetchStatus,
    pub services_price_range: Option<PriceRange>,
    pub get_services_price_range_status: FetchStatus,
    /// Filter of the most recent listings request. Kept across resets.
    pub last_filter: Option<ServiceFilter>,
    services_ticket: Ticket,
    price_range_ticket: Ticket,
}

impl ServicesState {
    pub fn statuses(&self) -> [FetchStatus; 2] {
        [self.get_services_status, self.get_services_price_range_status]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ServicesAction {
    GetServicesPending {
        filter: Option<ServiceFilter>,
    },
    GetServicesFulfilled {
        ticket: Ticket,
        services: Vec<ServiceListing>,
    },
    GetServicesRejected {
        ticket: Ticket,
    },
    GetPriceRangePending,
    GetPriceRangeFulfilled {
        ticket: Ticket,
        range: PriceRange,
    },
    GetPriceRangeRejected {
        ticket: Ticket,
    },
    Reset,
}

impl Reducer for ServicesState {
    type Action = ServicesAction;

    fn reduce(&mut self, action: ServicesAction) {
        match action {
            ServicesAction::GetServicesPending { filter } => {
                self.services_ticket += 1;
                self.get_services_status = FetchStatus::Loading;
                self.last_filter = filter;
            }
            ServicesAction::GetServicesFulfilled { ticket, services } => {
                if ticket != self.services_ticket {
                    tracing::debug!(ticket, "dropping stale services response");
                    return;
                }
                self.services = services;
                self.get_services_status = FetchStatus::Success;
            }
            ServicesAction::GetServicesRejected { ticket } => {
                if ticket == self.services_ticket {
                    self.get_services_status = FetchStatus::Error;
                }
            }
            ServicesAction::GetPriceRangePending => {
                self.price_range_ticket += 1;
                self.get_services_price_range_status = FetchStatus::Loading;
            }
            ServicesAction::GetPriceRangeFulfilled { ticket, range } => {
                if ticket != self.price_range_ticket {
                    tracing::debug!(ticket, "dropping stale price range response");
                    return;
                }
                self.services_price_range = Some(range);
                self.get_services_price_range_status = FetchStatus::Success;
            }
            ServicesAction::GetPriceRangeRejected { ticket } => {
                if ticket == self.price_range_ticket {
                    self.get_services_price_range_status = FetchStatus::Error;
                }
            }
            ServicesAction::Reset => {
                *self = ServicesState {
                    last_filter: self.last_filter.take(),
                    // Invalidate anything still in flight.
                    services_ticket: self.services_ticket + 1,
                    price_range_ticket: self.price_range_ticket + 1,
                    ..ServicesState::default()
                };
            }
        }
    }
}

/// Fetch listings with `filter`, regardless of the current status.
pub async fn get_services_action<D, A>(store: &mut D, api: &A, filter: Option<ServiceFilter>)
where
    D: Dispatch<ServicesState>,
    A: ServicesApi,
{
    tracing::debug!(?filter, "requesting services");
    store.dispatch(ServicesAction::GetServicesPending {
        filter: filter.clone(),
    });
    let ticket = store.select(|s| s.services_ticket);

    match api.get_services(filter.as_ref()).await {
        Ok(services) => {
            tracing::debug!(count = services.len(), "services received");
            store.dispatch(ServicesAction::GetServicesFulfilled { ticket, services });
        }
        Err(e) => {
            tracing::warn!("Failed to fetch services: {}", e);
            store.dispatch(ServicesAction::GetServicesRejected { ticket });
        }
    }
}

/// Fetch the price range, regardless of the current status.
pub async fn get_services_price_range_action<D, A>(store: &mut D, api: &A)
where
    D: Dispatch<ServicesState>,
    A: ServicesApi,
{
    store.dispatch(ServicesAction::GetPriceRangePending);
    let ticket = store.select(|s| s.price_range_ticket);

    match api.get_price_range().await {
        Ok(range) => store.dispatch(ServicesAction::GetPriceRangeFulfilled { ticket, range }),
        Err(e) => {
            tracing::warn!("Failed to fetch price range: {}", e);
            store.dispatch(ServicesAction::GetPriceRangeRejected { ticket });
        }
    }
}

/// Fetch listings with the last-applied filter if nothing has been requested yet.
pub async fn ensure_services<D, A>(store: &mut D, api: &A)
where
    D: Dispatch<ServicesState>,
    A: ServicesApi,
{
    let (status, filter) = store.select(|s| (s.get_services_status, s.last_filter.clone()));
    if status.is_initial() {
        get_services_action(store, api, filter).await;
    }
}

/// Fetch the price range if nothing has been requested yet.
pub async fn ensure_price_range<D, A>(store: &mut D, api: &A)
where
    D: Dispatch<ServicesState>,
    A: ServicesApi,
{
    if store.select(|s| s.get_services_price_range_status.is_initial()) {
        get_services_price_range_action(store, api).await;
    }
}

pub fn reset_services_state<D: Dispatch<ServicesState>>(store: &mut D) {
    store.dispatch(ServicesAction::Reset);
}

/// A single listing by id.
///
/// The grid is reset when the main page unmounts, so the detail page always asks the
/// backend. Failures are logged and reported as `None`.
pub async fn fetch_service<A: ServicesApi>(api: &A, id: ServiceId) -> Option<ServiceListing> {
    match api.get_service(id).await {
        Ok(service) => Some(service),
        Err(e) => {
            tracing::warn!("Failed to fetch service {}: {}", id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::LocalStore;
    use crate::memory::{MemoryServicesApi, RecordedRequest};

    fn listing(id: ServiceId, user: u64, price: u32) -> ServiceListing {
        ServiceListing {
            id,
            user,
            title: format!("Услуга {id}"),
            price,
            description: None,
            image: None,
        }
    }

    fn backend() -> MemoryServicesApi {
        MemoryServicesApi::new()
            .with_services(vec![listing(1, 7, 500), listing(2, 3, 1500)])
            .with_price_range(PriceRange {
                price_min: 100,
                price_max: 5000,
            })
    }

    fn is_services(r: &RecordedRequest) -> bool {
        matches!(r, RecordedRequest::GetServices(_))
    }

    #[tokio::test]
    async fn test_mount_fetches_once() {
        let api = backend();
        let mut store = LocalStore::new(ServicesState::default());

        // Two mounts without a reset in between
        for _ in 0..2 {
            ensure_services(&mut store, &api).await;
            ensure_price_range(&mut store, &api).await;
        }

        assert_eq!(api.count(is_services), 1);
        assert_eq!(api.count(|r| *r == RecordedRequest::GetPriceRange), 1);
        assert_eq!(store.state().services.len(), 2);
        assert_eq!(store.state().get_services_status, FetchStatus::Success);
        assert_eq!(
            store.state().services_price_range,
            Some(PriceRange {
                price_min: 100,
                price_max: 5000
            })
        );
    }

    #[tokio::test]
    async fn test_reset_allows_refetch() {
        let api = backend();
        let mut store = LocalStore::new(ServicesState::default());

        ensure_services(&mut store, &api).await;
        reset_services_state(&mut store);
        assert!(store.state().services.is_empty());
        assert_eq!(store.state().get_services_status, FetchStatus::Initial);

        ensure_services(&mut store, &api).await;
        assert_eq!(api.count(is_services), 2);
    }

    #[tokio::test]
    async fn test_failure_is_absorbed_and_not_retried() {
        let api = backend();
        api.set_failing(true);
        let mut store = LocalStore::new(ServicesState::default());

        ensure_services(&mut store, &api).await;
        ensure_price_range(&mut store, &api).await;
        assert_eq!(store.state().get_services_status, FetchStatus::Error);
        assert_eq!(
            store.state().get_services_price_range_status,
            FetchStatus::Error
        );
        assert!(store.state().services_price_range.is_none());

        // Error is not Initial: a second mount does not retry
        api.set_failing(false);
        ensure_services(&mut store, &api).await;
        assert_eq!(api.count(is_services), 1);
    }

    #[tokio::test]
    async fn test_filter_submission_is_idempotent() {
        let api = backend();
        let mut store = LocalStore::new(ServicesState::default());
        let filter = ServiceFilter {
            title: Some("Услуга".to_string()),
            price_min: Some(100),
            price_max: Some(1000),
        };

        get_services_action(&mut store, &api, Some(filter.clone())).await;
        get_services_action(&mut store, &api, Some(filter.clone())).await;

        let requests = api.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
        assert_eq!(store.state().services.len(), 1);
        assert_eq!(store.state().last_filter, Some(filter));
    }

    #[tokio::test]
    async fn test_last_filter_survives_reset() {
        let api = backend();
        let mut store = LocalStore::new(ServicesState::default());
        let filter = ServiceFilter {
            title: None,
            price_min: Some(1000),
            price_max: None,
        };

        get_services_action(&mut store, &api, Some(filter.clone())).await;
        reset_services_state(&mut store);
        ensure_services(&mut store, &api).await;

        assert_eq!(
            api.requests().last(),
            Some(&RecordedRequest::GetServices(Some(filter)))
        );
        assert_eq!(store.state().services.len(), 1);
        assert_eq!(store.state().services[0].id, 2);
    }

    #[test]
    fn test_response_after_reset_is_ignored() {
        let mut state = ServicesState::default();
        state.reduce(ServicesAction::GetServicesPending { filter: None });
        let ticket = state.services_ticket;

        state.reduce(ServicesAction::Reset);
        state.reduce(ServicesAction::GetServicesFulfilled {
            ticket,
            services: vec![listing(1, 7, 500)],
        });

        assert!(state.services.is_empty());
        assert_eq!(state.get_services_status, FetchStatus::Initial);
    }

    #[test]
    fn test_only_latest_request_applies() {
        let mut state = ServicesState::default();
        state.reduce(ServicesAction::GetServicesPending { filter: None });
        let first = state.services_ticket;
        state.reduce(ServicesAction::GetServicesPending { filter: None });
        let second = state.services_ticket;

        state.reduce(ServicesAction::GetServicesFulfilled {
            ticket: second,
            services: vec![listing(2, 3, 1500)],
        });
        state.reduce(ServicesAction::GetServicesFulfilled {
            ticket: first,
            services: vec![listing(1, 7, 500)],
        });
        state.reduce(ServicesAction::GetServicesRejected { ticket: first });

        assert_eq!(state.services, vec![listing(2, 3, 1500)]);
        assert_eq!(state.get_services_status, FetchStatus::Success);
    }

    #[tokio::test]
    async fn test_detail_fetch_after_grid_reset() {
        let api = backend();
        let mut store = LocalStore::new(ServicesState::default());
        ensure_services(&mut store, &api).await;
        reset_services_state(&mut store);
        assert!(store.state().services.is_empty());

        let found = fetch_service(&api, 2).await;
        assert_eq!(found.map(|s| s.user), Some(3));
        assert!(fetch_service(&api, 99).await.is_none());
        assert_eq!(
            api.requests()
                .into_iter()
                .filter(|r| matches!(r, RecordedRequest::GetService(_)))
                .collect::<Vec<_>>(),
            vec![RecordedRequest::GetService(2), RecordedRequest::GetService(99)]
        );

        api.set_failing(true);
        assert!(fetch_service(&api, 2).await.is_none());
    }
}
