//! In-memory catalog: pure reducers, read-only queries and the snapshot type
//! handed to the router.

pub mod queries;
pub mod reducer;

use std::sync::Arc;

use crate::domain::{Product, Subscription};

pub use reducer::*;

/// Immutable view of the catalog at one point in time.
///
/// The catalog service replaces its `Arc`s wholesale on every change, so a
/// snapshot never reflects a half-applied intent.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: Arc<Vec<Product>>,
    pub subscriptions: Arc<Vec<Subscription>>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>, subscriptions: Vec<Subscription>) -> Self {
        Self {
            products: Arc::new(products),
            subscriptions: Arc::new(subscriptions),
        }
    }
}
