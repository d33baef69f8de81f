//! The two stores: catalog and session. Each owns its state and is only
//! reached through its client.

mod catalog_service;
mod session_service;

pub use catalog_service::CatalogService;
pub use session_service::SessionService;
