mod main_page;
pub use main_page::MainPage;

mod auth;
pub use auth::AuthPage;

mod service;
pub use service::ServicePage;

mod service_create;
pub use service_create::ServiceCreatePage;

mod contract_signing;
pub use contract_signing::ContractSigningPage;
