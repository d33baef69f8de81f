use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A buyer's subscription to a product. Read-only sample data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub subscription_id: String,
    /// Email of the subscribed user.
    pub user_id: String,
    pub product_id: String,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubscriptionStatus {
    Active,
    ExpiringSoon,
    Expired,
}

impl Subscription {
    /// Status at `now`; a subscription ending within `window` is expiring soon.
    pub fn status_at(&self, now: DateTime<Utc>, window: Duration) -> SubscriptionStatus {
        if self.expiry_date < now {
            SubscriptionStatus::Expired
        } else if self.expiry_date - now <= window {
            SubscriptionStatus::ExpiringSoon
        } else {
            SubscriptionStatus::Active
        }
    }
}
