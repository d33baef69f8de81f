use tokio::sync::mpsc;

use crate::catalog::CatalogSnapshot;
use crate::domain::{ModerationDecision, Product, ProductStatus, ProductSubmission, Review, ReviewPayload, User};
use crate::error::CatalogError;
use crate::messages::CatalogRequest;

/// Handle to the catalog service. Cheap to clone.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl_client_lifecycle!(CatalogClient, CatalogRequest, CatalogError);

client_method!(CatalogClient => fn snapshot() -> CatalogSnapshot as CatalogRequest::Snapshot, Error = CatalogError);
client_method!(CatalogClient => fn get_product(id: String) -> Option<Product> as CatalogRequest::GetProduct, Error = CatalogError);
client_method!(CatalogClient => fn upvote(id: String) -> u32 as CatalogRequest::Upvote, Error = CatalogError);
client_method!(CatalogClient => fn submit_review(id: String, author: Option<User>, payload: ReviewPayload) -> Review as CatalogRequest::SubmitReview, Error = CatalogError);
client_method!(CatalogClient => fn submit_product(vendor: Option<User>, submission: ProductSubmission) -> String as CatalogRequest::SubmitProduct, Error = CatalogError);
client_method!(CatalogClient => fn moderate(id: String, decision: ModerationDecision) -> ProductStatus as CatalogRequest::Moderate, Error = CatalogError);

// Test-only method for internal state inspection
#[cfg(test)]
client_method!(CatalogClient => fn get_product_count() -> usize as CatalogRequest::GetProductCount, Error = CatalogError);
