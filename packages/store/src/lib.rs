pub mod api;
pub mod config;
pub mod dispatch;
pub mod filter;
pub mod models;
pub mod services;
pub mod status;
pub mod user;
pub mod view;

mod memory;
pub use memory::{MemoryApiError, MemoryServicesApi, RecordedRequest};

pub use api::ServicesApi;
pub use config::{ApiConfig, AppConfig, MarketConfig};
pub use dispatch::{Dispatch, LocalStore, Reducer};
pub use filter::{FilterForm, PriceField};
pub use models::{PriceRange, Role, ServiceFilter, ServiceId, ServiceListing, UserId, UserInfo};
pub use services::{
    ensure_price_range, ensure_services, fetch_service, get_services_action,
    get_services_price_range_action, reset_services_state, ServicesAction, ServicesState,
};
pub use status::{is_loading, FetchStatus};
pub use user::{ensure_current_user, get_current_user_action, logout_action, UserAction, UserState};
pub use view::{partition_services, CreateLink, ListingMode, MainPageView, Partition};
