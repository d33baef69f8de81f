//! Thin handles around the service channels, with macro-generated methods.

#[macro_use]
mod macros;
mod catalog_client;
mod session_client;

pub use catalog_client::CatalogClient;
pub use session_client::SessionClient;
