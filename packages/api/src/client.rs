use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use store::{ApiConfig, PriceRange, ServiceFilter, ServiceId, ServiceListing, ServicesApi, UserInfo};

use crate::error::ApiError;

/// Backend client. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpServicesApi {
    client: Client,
    base_url: String,
}

impl HttpServicesApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        let base_url = resolve_base_url(&config.base_url);
        tracing::info!(%base_url, "API client ready");
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn services_request(&self, filter: Option<&ServiceFilter>) -> RequestBuilder {
        let request = self.client.get(self.url("services/"));
        match filter {
            Some(filter) => request.query(filter),
            None => request,
        }
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = with_credentials(request).send().await?;
        if let Some(e) = ApiError::from_status(response.status(), url) {
            return Err(e);
        }
        Ok(response.json().await?)
    }
}

impl ServicesApi for HttpServicesApi {
    type Error = ApiError;

    async fn get_services(
        &self,
        filter: Option<&ServiceFilter>,
    ) -> Result<Vec<ServiceListing>, ApiError> {
        let url = self.url("services/");
        self.fetch_json(&url, self.services_request(filter)).await
    }

    async fn get_price_range(&self) -> Result<PriceRange, ApiError> {
        let url = self.url("services/price-range/");
        self.fetch_json(&url, self.client.get(&url)).await
    }

    async fn get_service(&self, id: ServiceId) -> Result<ServiceListing, ApiError> {
        let url = self.url(&format!("services/{id}/"));
        self.fetch_json(&url, self.client.get(&url)).await
    }

    async fn get_current_user(&self) -> Result<Option<UserInfo>, ApiError> {
        let url = self.url("users/me/");
        let response = with_credentials(self.client.get(&url)).send().await?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status => {
                if let Some(e) = ApiError::from_status(status, &url) {
                    return Err(e);
                }
                Ok(Some(response.json().await?))
            }
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let url = self.url("auth/logout/");
        let response = with_credentials(self.client.post(&url)).send().await?;
        match ApiError::from_status(response.status(), &url) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        request.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        request
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `reqwest` needs absolute URLs; a bare path is resolved against the page origin.
fn resolve_base_url(base: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if base.starts_with('/') {
            if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                return format!("{origin}{base}");
            }
        }
    }
    base.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HttpServicesApi {
        HttpServicesApi::new(&ApiConfig {
            base_url: "http://localhost:8000/api/".to_string(),
        })
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/api", "services/"), "/api/services/");
        assert_eq!(join_url("/api/", "/services/"), "/api/services/");
        assert_eq!(
            join_url("http://localhost:8000/api", "users/me/"),
            "http://localhost:8000/api/users/me/"
        );
    }

    #[test]
    fn test_services_query_omits_unset_fields() {
        let filter = ServiceFilter {
            title: Some("ремонт".to_string()),
            price_min: None,
            price_max: Some(5000),
        };
        let request = api().services_request(Some(&filter)).build().unwrap();
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("title".to_string(), "ремонт".to_string()),
                ("price_max".to_string(), "5000".to_string()),
            ]
        );
        assert_eq!(request.url().path(), "/api/services/");
    }

    #[test]
    fn test_unfiltered_request_has_no_query() {
        let request = api().services_request(None).build().unwrap();
        assert_eq!(request.url().query(), None);
    }
}
