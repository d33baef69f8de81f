use thiserror::Error;

use crate::domain::{ModerationDecision, ProductStatus};
use crate::router::Route;

/// Errors from catalog intents. A failed intent never changes the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("No user is signed in")]
    NotAuthenticated,
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    #[error("Product already exists: {0}")]
    AlreadyExists(String),
    #[error("Cannot mark product {id} as {decision}: status is already {from}")]
    InvalidTransition {
        id: String,
        from: ProductStatus,
        decision: ModerationDecision,
    },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors from session intents.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Session validation error: {0}")]
    ValidationError(String),
    #[error("No user is signed in")]
    NotSignedIn,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Why a fragment did not resolve to the view it names.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteError {
    #[error("Unknown path: {0}")]
    UnknownPath(String),
    #[error("Sign-in required for {0}")]
    Unauthenticated(Route),
    #[error("Not allowed to open {0}")]
    Forbidden(Route),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Malformed seed products: {0}")]
    Products(#[from] serde_json::Error),
    #[error("Seed subscription date out of range: {0}")]
    DateOutOfRange(String),
}
