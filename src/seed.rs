//! Static seed data: the launch catalog and a sample buyer's subscriptions.

use chrono::{DateTime, Duration, Months, Utc};
use tracing::{debug, instrument};

use crate::domain::{Product, Subscription};
use crate::error::SeedError;

/// Product featured as today's launch on the home view.
pub const TODAY_LAUNCH_ID: &str = "craftnote";

/// Email of the sample buyer who owns the seed subscriptions.
pub const SAMPLE_BUYER_EMAIL: &str = "jane@doe.com";

const PRODUCTS_JSON: &str = include_str!("../data/products.json");

#[derive(Debug, Clone)]
pub struct Seed {
    pub products: Vec<Product>,
    pub subscriptions: Vec<Subscription>,
}

impl Seed {
    /// Loads the embedded catalog; subscription dates are placed relative to `now`
    /// so the sample buyer always has one active, one expiring and one expired.
    #[instrument(skip_all)]
    pub fn load(now: DateTime<Utc>) -> Result<Self, SeedError> {
        let products: Vec<Product> = serde_json::from_str(PRODUCTS_JSON)?;
        let subscriptions = sample_subscriptions(now)?;
        debug!(
            product_count = products.len(),
            subscription_count = subscriptions.len(),
            "Seed data loaded"
        );
        Ok(Self { products, subscriptions })
    }
}

fn sample_subscriptions(now: DateTime<Utc>) -> Result<Vec<Subscription>, SeedError> {
    let in_six_months = now
        .checked_add_months(Months::new(6))
        .ok_or_else(|| SeedError::DateOutOfRange("now + 6 months".to_string()))?;
    let a_year_ago = now
        .checked_sub_months(Months::new(12))
        .ok_or_else(|| SeedError::DateOutOfRange("now - 12 months".to_string()))?;

    Ok(vec![
        subscription("sub_1", "craftnote", now - Duration::days(10), in_six_months),
        subscription("sub_2", "pixel-perfect", now - Duration::days(90), now + Duration::days(3)),
        subscription("sub_3", "flowstate", a_year_ago, now - Duration::days(5)),
    ])
}

fn subscription(id: &str, product_id: &str, purchase_date: DateTime<Utc>, expiry_date: DateTime<Utc>) -> Subscription {
    Subscription {
        subscription_id: id.to_string(),
        user_id: SAMPLE_BUYER_EMAIL.to_string(),
        product_id: product_id.to_string(),
        purchase_date,
        expiry_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProductStatus, SubscriptionStatus};

    #[test]
    fn test_seed_products_parse() {
        let seed = Seed::load(Utc::now()).unwrap();
        let ids: Vec<&str> = seed.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["craftnote", "pixel-perfect", "querymaster", "flowstate"]);
        assert!(seed.products.iter().all(|p| p.status == ProductStatus::Approved));
        assert!(seed.products.iter().all(|p| p.vendor_id.is_none()));
        assert_eq!(seed.products[0].deal.as_ref().map(|d| d.code.as_str()), Some("REALPICK50"));
        assert_eq!(seed.products[0].reviews.len(), 2);
    }

    #[test]
    fn test_seed_subscriptions_cover_every_status() {
        let now = Utc::now();
        let seed = Seed::load(now).unwrap();
        let statuses: Vec<SubscriptionStatus> = seed
            .subscriptions
            .iter()
            .map(|s| s.status_at(now, Duration::days(7)))
            .collect();
        assert_eq!(
            statuses,
            vec![SubscriptionStatus::Active, SubscriptionStatus::ExpiringSoon, SubscriptionStatus::Expired]
        );
    }
}
