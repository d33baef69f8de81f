use tokio::sync::oneshot;

use crate::catalog::CatalogSnapshot;
use crate::domain::{ModerationDecision, Product, ProductStatus, ProductSubmission, Review, ReviewPayload, User};
use crate::error::{CatalogError, SessionError};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Intents and queries handled by the catalog service. Each variant carries
/// its parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum CatalogRequest {
    Snapshot {
        respond_to: ServiceResponse<CatalogSnapshot, CatalogError>,
    },
    GetProduct {
        id: String,
        respond_to: ServiceResponse<Option<Product>, CatalogError>,
    },
    Upvote {
        id: String,
        respond_to: ServiceResponse<u32, CatalogError>,
    },
    SubmitReview {
        id: String,
        author: Option<User>,
        payload: ReviewPayload,
        respond_to: ServiceResponse<Review, CatalogError>,
    },
    SubmitProduct {
        vendor: Option<User>,
        submission: ProductSubmission,
        respond_to: ServiceResponse<String, CatalogError>,
    },
    Moderate {
        id: String,
        decision: ModerationDecision,
        respond_to: ServiceResponse<ProductStatus, CatalogError>,
    },
    Shutdown,
    #[cfg(test)]
    GetProductCount {
        respond_to: ServiceResponse<usize, CatalogError>,
    },
}

#[derive(Debug)]
pub enum SessionRequest {
    CurrentUser {
        respond_to: ServiceResponse<Option<User>, SessionError>,
    },
    Login {
        user: User,
        respond_to: ServiceResponse<(), SessionError>,
    },
    Logout {
        respond_to: ServiceResponse<Option<User>, SessionError>,
    },
    UpdateProfile {
        user: User,
        respond_to: ServiceResponse<User, SessionError>,
    },
    Shutdown,
}
