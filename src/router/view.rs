use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::{Product, Subscription, SubscriptionStatus, User};

/// What the presentation layer should render, with the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ViewDescriptor {
    Home {
        featured: Option<Product>,
        products: Vec<Product>,
    },
    Products {
        category: Option<String>,
        categories: Vec<String>,
        products: Vec<Product>,
    },
    ProductDetail {
        product: Product,
        can_review: bool,
    },
    SubmitProduct,
    MySubmissions {
        user: User,
        submissions: Vec<Product>,
    },
    Dashboard {
        user: User,
        subscriptions: Vec<DashboardEntry>,
    },
    Admin {
        pending: Vec<Product>,
    },
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTag {
    Home,
    Products,
    ProductDetail,
    SubmitProduct,
    MySubmissions,
    Dashboard,
    Admin,
    Login,
    Signup,
}

impl ViewDescriptor {
    pub fn tag(&self) -> ViewTag {
        match self {
            ViewDescriptor::Home { .. } => ViewTag::Home,
            ViewDescriptor::Products { .. } => ViewTag::Products,
            ViewDescriptor::ProductDetail { .. } => ViewTag::ProductDetail,
            ViewDescriptor::SubmitProduct => ViewTag::SubmitProduct,
            ViewDescriptor::MySubmissions { .. } => ViewTag::MySubmissions,
            ViewDescriptor::Dashboard { .. } => ViewTag::Dashboard,
            ViewDescriptor::Admin { .. } => ViewTag::Admin,
            ViewDescriptor::Login => ViewTag::Login,
            ViewDescriptor::Signup => ViewTag::Signup,
        }
    }
}

/// A row of the buyer dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardEntry {
    pub subscription: Subscription,
    pub product: Product,
}

impl DashboardEntry {
    pub fn status_at(&self, now: DateTime<Utc>, window: Duration) -> SubscriptionStatus {
        self.subscription.status_at(now, window)
    }
}
