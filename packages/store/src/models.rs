//! # Domain models for listings and users
//!
//! These are the typed results the [`crate::ServicesApi`] hands back to the store.
//! They are `Serialize + Deserialize` so the HTTP client in the `api` crate can decode
//! them straight from JSON.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ServiceListing`] | A service offered by a worker: owner id, title, price and optional description/image. |
//! | [`PriceRange`] | Lowest and highest listing price currently on offer. |
//! | [`ServiceFilter`] | Query parameters for "get listings". Unset fields are omitted from the query string. |
//! | [`UserInfo`] | The signed-in user with the flags the backend exposes. |
//! | [`Role`] | Closed set of roles derived from [`UserInfo`]. |

use serde::{Deserialize, Serialize};

pub type ServiceId = u64;
pub type UserId = u64;

/// A service listing as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: ServiceId,
    /// Owner of the listing.
    pub user: UserId,
    pub title: String,
    /// Price in whole roubles.
    pub price: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Bounds of the prices currently on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub price_min: u32,
    pub price_max: u32,
}

/// Query parameters accepted by "get listings".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u32>,
}

impl ServiceFilter {
    /// Whether a listing satisfies every set bound.
    ///
    /// Title matching is a case-insensitive substring test.
    pub fn matches(&self, service: &ServiceListing) -> bool {
        let title_ok = self.title.as_deref().map_or(true, |needle| {
            service
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let min_ok = self.price_min.map_or(true, |min| service.price >= min);
        let max_ok = self.price_max.map_or(true, |max| service.price <= max);
        title_ok && min_ok && max_ok
    }
}

/// User information exposed by the backend for the current session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_worker: bool,
}

impl UserInfo {
    /// Role for an account that is known to the backend.
    ///
    /// A worker keeps the worker view when also flagged as staff.
    pub fn role(&self) -> Role {
        match (self.is_worker, self.is_staff) {
            (true, staff) => Role::Worker { staff },
            (false, true) => Role::Staff,
            (false, false) => Role::Client,
        }
    }

    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            self.email.as_deref().unwrap_or("")
        } else {
            &self.username
        }
    }
}

/// Who is looking at the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Anonymous,
    Client,
    /// Owns listings; `staff` grants the create link and edit markers in both modes.
    Worker { staff: bool },
    Staff,
}

impl Role {
    pub fn is_worker(self) -> bool {
        matches!(self, Role::Worker { .. })
    }

    pub fn is_staff(self) -> bool {
        matches!(self, Role::Staff | Role::Worker { staff: true })
    }
}
