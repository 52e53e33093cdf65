use std::sync::{Arc, Mutex};

use crate::api::ServicesApi;
use crate::models::{PriceRange, ServiceFilter, ServiceId, ServiceListing, UserInfo};

/// A request seen by [`MemoryServicesApi`], in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedRequest {
    GetServices(Option<ServiceFilter>),
    GetPriceRange,
    GetService(ServiceId),
    GetCurrentUser,
    Logout,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MemoryApiError {
    #[error("backend unavailable")]
    Unavailable,
    #[error("service {0} not found")]
    NotFound(ServiceId),
    #[error("price range not configured")]
    NoPriceRange,
}

#[derive(Debug, Default)]
struct Inner {
    services: Vec<ServiceListing>,
    price_range: Option<PriceRange>,
    user: Option<UserInfo>,
    failing: bool,
    requests: Vec<RecordedRequest>,
}

/// In-memory backend for tests. Records every request it receives.
#[derive(Clone, Debug, Default)]
pub struct MemoryServicesApi {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryServicesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services(self, services: Vec<ServiceListing>) -> Self {
        self.inner.lock().unwrap().services = services;
        self
    }

    pub fn with_price_range(self, range: PriceRange) -> Self {
        self.inner.lock().unwrap().price_range = Some(range);
        self
    }

    pub fn with_user(self, user: UserInfo) -> Self {
        self.inner.lock().unwrap().user = Some(user);
        self
    }

    /// Make every subsequent request fail with [`MemoryApiError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn count(&self, matches: impl Fn(&RecordedRequest) -> bool) -> usize {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| matches(r))
            .count()
    }

    fn record(&self, request: RecordedRequest) -> Result<(), MemoryApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        if inner.failing {
            Err(MemoryApiError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl ServicesApi for MemoryServicesApi {
    type Error = MemoryApiError;

    async fn get_services(
        &self,
        filter: Option<&ServiceFilter>,
    ) -> Result<Vec<ServiceListing>, MemoryApiError> {
        self.record(RecordedRequest::GetServices(filter.cloned()))?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .services
            .iter()
            .filter(|s| filter.map_or(true, |f| f.matches(s)))
            .cloned()
            .collect())
    }

    async fn get_price_range(&self) -> Result<PriceRange, MemoryApiError> {
        self.record(RecordedRequest::GetPriceRange)?;
        self.inner
            .lock()
            .unwrap()
            .price_range
            .ok_or(MemoryApiError::NoPriceRange)
    }

    async fn get_service(&self, id: ServiceId) -> Result<ServiceListing, MemoryApiError> {
        self.record(RecordedRequest::GetService(id))?;
        self.inner
            .lock()
            .unwrap()
            .services
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(MemoryApiError::NotFound(id))
    }

    async fn get_current_user(&self) -> Result<Option<UserInfo>, MemoryApiError> {
        self.record(RecordedRequest::GetCurrentUser)?;
        Ok(self.inner.lock().unwrap().user.clone())
    }

    async fn logout(&self) -> Result<(), MemoryApiError> {
        self.record(RecordedRequest::Logout)?;
        self.inner.lock().unwrap().user = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: ServiceId, title: &str, price: u32) -> ServiceListing {
        ServiceListing {
            id,
            user: 1,
            title: title.to_string(),
            price,
            description: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_filters_and_records_requests() {
        let api = MemoryServicesApi::new().with_services(vec![
            listing(1, "Репетитор", 800),
            listing(2, "Репетитор английского", 2000),
            listing(3, "Уборка", 1200),
        ]);

        assert_eq!(api.get_services(None).await.unwrap().len(), 3);

        let filter = ServiceFilter {
            title: Some("репетитор".to_string()),
            price_min: None,
            price_max: Some(1000),
        };
        let found = api.get_services(Some(&filter)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);

        assert_eq!(
            api.requests(),
            vec![
                RecordedRequest::GetServices(None),
                RecordedRequest::GetServices(Some(filter)),
            ]
        );
    }

    #[tokio::test]
    async fn test_failing_backend_still_records() {
        let api = MemoryServicesApi::new();
        api.set_failing(true);

        assert_eq!(
            api.get_price_range().await,
            Err(MemoryApiError::Unavailable)
        );
        assert_eq!(api.count(|r| *r == RecordedRequest::GetPriceRange), 1);
    }

    #[tokio::test]
    async fn test_get_service_by_id() {
        let api = MemoryServicesApi::new().with_services(vec![listing(5, "Сантехник", 900)]);

        assert_eq!(api.get_service(5).await.unwrap().title, "Сантехник");
        assert_eq!(api.get_service(6).await, Err(MemoryApiError::NotFound(6)));
    }
}
