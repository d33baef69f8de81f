//! Pure state transitions over the product list.
//!
//! Each `apply_*` takes the current list and returns a new one; on error the
//! caller keeps the list it already has, so a failed intent changes nothing.

use crate::domain::{ModerationDecision, Product, ProductSubmission, Review, ReviewPayload, User};
use crate::error::CatalogError;

/// Adds one vote to `product_id`. Repeat votes all count.
pub fn apply_upvote(products: &[Product], product_id: &str) -> Result<Vec<Product>, CatalogError> {
    update_one(products, product_id, |product| {
        product.upvotes = product.upvotes.saturating_add(1);
        Ok(())
    })
}

/// Prepends a review by `user` and recomputes the product's rating.
///
/// # Errors
/// - `NotAuthenticated` when nobody is signed in
/// - `InvalidPayload` when the rating is outside 1..=5
/// - `NotFound` for an unknown product
pub fn apply_review(
    products: &[Product],
    product_id: &str,
    user: Option<&User>,
    payload: ReviewPayload,
    review_id: u64,
) -> Result<Vec<Product>, CatalogError> {
    let user = user.ok_or(CatalogError::NotAuthenticated)?;
    payload.validate()?;
    let review = Review::written_by(review_id, user, payload);
    update_one(products, product_id, move |product| {
        product.push_review(review);
        Ok(())
    })
}

/// Prepends a pending product owned by `user`.
///
/// # Errors
/// - `NotAuthenticated` when nobody is signed in
/// - `InvalidPayload` when the name yields an empty id
/// - `AlreadyExists` when the id is taken
pub fn apply_submission(
    products: &[Product],
    user: Option<&User>,
    submission: ProductSubmission,
) -> Result<Vec<Product>, CatalogError> {
    let user = user.ok_or(CatalogError::NotAuthenticated)?;
    let product = Product::from_submission(submission, &user.email)?;
    if products.iter().any(|p| p.id == product.id) {
        return Err(CatalogError::AlreadyExists(product.id));
    }

    let mut next = Vec::with_capacity(products.len() + 1);
    next.push(product);
    next.extend_from_slice(products);
    Ok(next)
}

/// Moves a pending product to approved or rejected.
///
/// Does not check who is asking; the admin route guard is the only gate.
pub fn apply_moderation(
    products: &[Product],
    product_id: &str,
    decision: ModerationDecision,
) -> Result<Vec<Product>, CatalogError> {
    update_one(products, product_id, |product| match product.status.moderate(decision) {
        Ok(next) => {
            product.status = next;
            Ok(())
        }
        Err(decision) => Err(CatalogError::InvalidTransition {
            id: product.id.clone(),
            from: product.status,
            decision,
        }),
    })
}

fn update_one(
    products: &[Product],
    product_id: &str,
    apply: impl FnOnce(&mut Product) -> Result<(), CatalogError>,
) -> Result<Vec<Product>, CatalogError> {
    let index = products
        .iter()
        .position(|p| p.id == product_id)
        .ok_or_else(|| CatalogError::NotFound(product_id.to_string()))?;

    let mut next = products.to_vec();
    apply(&mut next[index])?;
    Ok(next)
}
