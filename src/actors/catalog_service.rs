use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::catalog::{self, queries, CatalogSnapshot};
use crate::clients::CatalogClient;
use crate::domain::{ModerationDecision, Product, ProductStatus, ProductSubmission, Review, ReviewPayload, Subscription, User};
use crate::error::CatalogError;
use crate::messages::{CatalogRequest, ServiceResponse};
use crate::seed::Seed;

/// Owns the product and subscription collections.
///
/// Messages are handled one at a time. Every change runs a pure reducer over
/// the current list and swaps the result in as a new `Arc`, so snapshots
/// handed out earlier stay intact and a failed intent leaves nothing behind.
pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    products: Arc<Vec<Product>>,
    subscriptions: Arc<Vec<Subscription>>,
    last_review_id: u64,
}

impl CatalogService {
    pub fn new(buffer_size: usize, seed: Seed) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let last_review_id = seed
            .products
            .iter()
            .flat_map(|p| p.reviews.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);
        let service = Self {
            receiver,
            products: Arc::new(seed.products),
            subscriptions: Arc::new(seed.subscriptions),
            last_review_id,
        };
        (service, CatalogClient::new(sender))
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!(product_count = self.products.len(), "CatalogService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                CatalogRequest::GetProduct { id, respond_to } => {
                    self.handle_get_product(id, respond_to);
                }
                CatalogRequest::Upvote { id, respond_to } => {
                    self.handle_upvote(id, respond_to);
                }
                CatalogRequest::SubmitReview {
                    id,
                    author,
                    payload,
                    respond_to,
                } => {
                    self.handle_submit_review(id, author, payload, respond_to);
                }
                CatalogRequest::SubmitProduct {
                    vendor,
                    submission,
                    respond_to,
                } => {
                    self.handle_submit_product(vendor, submission, respond_to);
                }
                CatalogRequest::Moderate {
                    id,
                    decision,
                    respond_to,
                } => {
                    self.handle_moderate(id, decision, respond_to);
                }
                CatalogRequest::Shutdown => {
                    info!("CatalogService shutting down");
                    break;
                }
                #[cfg(test)]
                CatalogRequest::GetProductCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.products.len()));
                }
            }
        }

        info!("CatalogService stopped");
    }

    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: Arc::clone(&self.products),
            subscriptions: Arc::clone(&self.subscriptions),
        }
    }

    fn commit(&mut self, next: Vec<Product>) {
        self.products = Arc::new(next);
    }

    /// Milliseconds since the epoch, bumped past the previous id when the
    /// clock has not moved.
    fn next_review_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last_review_id + 1);
        self.last_review_id = id;
        id
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_get_product(&self, id: String, respond_to: ServiceResponse<Option<Product>, CatalogError>) {
        debug!("Processing get_product request");

        let product = queries::find(&self.products, &id).cloned();
        match &product {
            Some(product) => debug!(product_name = %product.name, status = %product.status, "Product found"),
            None => debug!("Product not found"),
        }

        let _ = respond_to.send(Ok(product));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_upvote(&mut self, id: String, respond_to: ServiceResponse<u32, CatalogError>) {
        debug!("Processing upvote request");

        let result = catalog::apply_upvote(&self.products, &id).map(|next| {
            let upvotes = queries::find(&next, &id).map_or(0, |p| p.upvotes);
            self.commit(next);
            info!(upvotes, "Product upvoted");
            upvotes
        });
        if let Err(e) = &result {
            warn!(error = %e, "Upvote rejected");
        }

        let _ = respond_to.send(result);
    }

    #[instrument(
        fields(product_id = %id, rating = payload.rating, signed_in = author.is_some()),
        skip(self, author, payload, respond_to)
    )]
    fn handle_submit_review(
        &mut self,
        id: String,
        author: Option<User>,
        payload: ReviewPayload,
        respond_to: ServiceResponse<Review, CatalogError>,
    ) {
        debug!("Processing submit_review request");

        // only spend an id on reviews that can land
        let review_id = match author {
            Some(_) => self.next_review_id(),
            None => 0,
        };
        let result = catalog::apply_review(&self.products, &id, author.as_ref(), payload, review_id).and_then(|next| {
            let product = queries::find(&next, &id).ok_or_else(|| CatalogError::NotFound(id.clone()))?;
            let review = product.reviews.first().cloned().ok_or_else(|| CatalogError::NotFound(id.clone()))?;
            info!(
                review_id = review.id,
                review_count = product.review_count,
                rating = product.rating,
                "Review added"
            );
            self.commit(next);
            Ok(review)
        });
        if let Err(e) = &result {
            warn!(error = %e, "Review rejected");
        }

        let _ = respond_to.send(result);
    }

    #[instrument(
        fields(product_name = %submission.name, signed_in = vendor.is_some()),
        skip(self, vendor, submission, respond_to)
    )]
    fn handle_submit_product(
        &mut self,
        vendor: Option<User>,
        submission: ProductSubmission,
        respond_to: ServiceResponse<String, CatalogError>,
    ) {
        debug!("Processing submit_product request");

        let result = catalog::apply_submission(&self.products, vendor.as_ref(), submission).and_then(|next| {
            let id = next
                .first()
                .map(|p| p.id.clone())
                .ok_or_else(|| CatalogError::InvalidPayload("empty catalog after submission".to_string()))?;
            self.commit(next);
            info!(product_id = %id, "Product submitted for review");
            Ok(id)
        });
        if let Err(e) = &result {
            warn!(error = %e, "Submission rejected");
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id, decision = %decision), skip(self, respond_to))]
    fn handle_moderate(
        &mut self,
        id: String,
        decision: ModerationDecision,
        respond_to: ServiceResponse<ProductStatus, CatalogError>,
    ) {
        debug!("Processing moderate request");

        let result = catalog::apply_moderation(&self.products, &id, decision).map(|next| {
            let status = queries::find(&next, &id).map_or(ProductStatus::Pending, |p| p.status);
            self.commit(next);
            info!(status = %status, "Product moderated");
            status
        });
        if let Err(e) = &result {
            warn!(error = %e, "Moderation rejected");
        }

        let _ = respond_to.send(result);
    }
}
