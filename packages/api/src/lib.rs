//! # API crate — HTTP client for the marketplace backend
//!
//! Implements [`store::ServicesApi`] over `reqwest`, so the store's async actions can
//! run against the real backend in the browser.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `get_services` | `GET {base}/services/?title=&price_min=&price_max=` |
//! | `get_price_range` | `GET {base}/services/price-range/` |
//! | `get_service` | `GET {base}/services/{id}/` |
//! | `get_current_user` | `GET {base}/users/me/` (401/403 mean anonymous) |
//! | `logout` | `POST {base}/auth/logout/` |
//!
//! All bodies are JSON. On WASM every request carries the browser's cookies.

mod client;
mod error;

pub use client::HttpServicesApi;
pub use error::ApiError;
