use std::collections::BTreeSet;

use crate::domain::{category_slug, Product, ProductStatus, Subscription};

pub fn find<'a>(products: &'a [Product], product_id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == product_id)
}

/// Approved products, most upvoted first. Ties keep catalog order.
pub fn top_listed(products: &[Product]) -> Vec<Product> {
    let mut listed = listed(products, None);
    listed.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
    listed
}

/// Approved products in catalog order, optionally restricted to a category slug.
pub fn listed(products: &[Product], category: Option<&str>) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.is_listed())
        .filter(|p| category.map_or(true, |slug| p.has_category_slug(slug)))
        .cloned()
        .collect()
}

pub fn pending(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.status == ProductStatus::Pending)
        .cloned()
        .collect()
}

pub fn by_vendor(products: &[Product], vendor_email: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.vendor_id.as_deref() == Some(vendor_email))
        .cloned()
        .collect()
}

/// Every category used by any product, sorted and without duplicates.
pub fn all_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .flat_map(|p| p.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Category names whose link slug is `slug`.
pub fn category_for_slug(products: &[Product], slug: &str) -> Option<String> {
    all_categories(products)
        .into_iter()
        .find(|category| category_slug(category) == slug)
}

/// The user's subscriptions paired with the products they refer to.
/// Subscriptions to products no longer in the catalog are skipped.
pub fn subscriptions_of(
    subscriptions: &[Subscription],
    products: &[Product],
    user_email: &str,
) -> Vec<(Subscription, Product)> {
    subscriptions
        .iter()
        .filter(|s| s.user_id == user_email)
        .filter_map(|s| find(products, &s.product_id).map(|p| (s.clone(), p.clone())))
        .collect()
}
