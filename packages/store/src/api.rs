//! The seam between the store and whatever talks to the backend.
//!
//! The browser build uses the HTTP client from the `api` crate; tests use
//! [`crate::MemoryServicesApi`].

use crate::models::{PriceRange, ServiceFilter, ServiceId, ServiceListing, UserInfo};

/// Async interface to the marketplace backend.
pub trait ServicesApi {
    type Error: std::fmt::Display;

    fn get_services(
        &self,
        filter: Option<&ServiceFilter>,
    ) -> impl std::future::Future<Output = Result<Vec<ServiceListing>, Self::Error>>;
    fn get_price_range(
        &self,
    ) -> impl std::future::Future<Output = Result<PriceRange, Self::Error>>;
    fn get_service(
        &self,
        id: ServiceId,
    ) -> impl std::future::Future<Output = Result<ServiceListing, Self::Error>>;
    /// `Ok(None)` when the session is anonymous.
    fn get_current_user(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<UserInfo>, Self::Error>>;
    fn logout(&self) -> impl std::future::Future<Output = Result<(), Self::Error>>;
}
