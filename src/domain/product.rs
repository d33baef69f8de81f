use std::fmt;

use serde::{Deserialize, Serialize};

use super::review::Review;
use super::slug::{is_js_whitespace, slugify};
use crate::error::CatalogError;

/// A product listed (or waiting to be listed) on the board.
///
/// `rating` and `review_count` are derived from `reviews` and only change
/// through [`Product::push_review`]. Seed products may carry historical
/// figures that are replaced by the derived values on the first new review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub logo_url: String,
    pub website_url: String,
    pub categories: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub upvotes: u32,
    pub status: ProductStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub made_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<Deal>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// Promotional deal shown on a product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub title: String,
    pub description: String,
    pub discount: String,
    pub code: String,
    pub expiry: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductStatus::Pending => write!(f, "pending"),
            ProductStatus::Approved => write!(f, "approved"),
            ProductStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Outcome an admin picks for a pending product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationDecision {
    Approved,
    Rejected,
}

impl fmt::Display for ModerationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModerationDecision::Approved => write!(f, "approved"),
            ModerationDecision::Rejected => write!(f, "rejected"),
        }
    }
}

impl ProductStatus {
    /// Applies a moderation decision. Only `Pending` may move; `Approved` and
    /// `Rejected` are terminal.
    pub fn moderate(self, decision: ModerationDecision) -> Result<ProductStatus, ModerationDecision> {
        match (self, decision) {
            (ProductStatus::Pending, ModerationDecision::Approved) => Ok(ProductStatus::Approved),
            (ProductStatus::Pending, ModerationDecision::Rejected) => Ok(ProductStatus::Rejected),
            (_, decision) => Err(decision),
        }
    }
}

/// Data a vendor provides when submitting a product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub logo_url: String,
    pub website_url: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub made_in: Option<String>,
}

/// Raw fields of the "Launch Your Product" form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionForm {
    pub product_name: String,
    pub tagline: String,
    pub description: String,
    pub website_url: String,
    pub categories: String,
    pub logo_url: String,
    pub gallery_urls: String,
}

impl From<SubmissionForm> for ProductSubmission {
    fn from(form: SubmissionForm) -> Self {
        let categories = split_entries(&form.categories, &[',']);
        let gallery = split_entries(&form.gallery_urls, &[',', '\n']);
        Self {
            name: form.product_name.trim().to_string(),
            tagline: form.tagline.trim().to_string(),
            description: form.description.trim().to_string(),
            logo_url: form.logo_url.trim().to_string(),
            website_url: form.website_url.trim().to_string(),
            categories,
            gallery,
            made_in: None,
        }
    }
}

impl ProductSubmission {
    /// Every form field except the gallery is required.
    fn check_required(&self) -> Result<(), CatalogError> {
        let fields = [
            ("name", &self.name),
            ("tagline", &self.tagline),
            ("description", &self.description),
            ("websiteUrl", &self.website_url),
            ("logoUrl", &self.logo_url),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CatalogError::InvalidPayload(format!("{} is required", field)));
        }
        if self.categories.iter().all(|c| c.trim().is_empty()) {
            return Err(CatalogError::InvalidPayload("at least one category is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
impl ProductSubmission {
    /// A submission with every required field filled in.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tagline: "Ship faster".to_string(),
            description: "Does the thing, quickly.".to_string(),
            logo_url: "https://example.com/logo.png".to_string(),
            website_url: "https://example.com".to_string(),
            categories: vec!["Dev Tools".to_string()],
            ..Default::default()
        }
    }
}

fn split_entries(raw: &str, separators: &[char]) -> Vec<String> {
    raw.split(|c| separators.contains(&c))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

impl Product {
    /// Builds a pending product owned by `vendor_email`.
    ///
    /// # Errors
    /// `InvalidPayload` when a required field is blank, when there are no
    /// categories, or when the name has no characters that survive slugging.
    pub fn from_submission(submission: ProductSubmission, vendor_email: &str) -> Result<Self, CatalogError> {
        submission.check_required()?;
        let id = slugify(&submission.name);
        if id.is_empty() {
            return Err(CatalogError::InvalidPayload(format!(
                "product name {:?} does not produce an id",
                submission.name
            )));
        }

        let mut categories: Vec<String> = Vec::with_capacity(submission.categories.len());
        for category in submission.categories {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        Ok(Self {
            id,
            name: submission.name,
            tagline: submission.tagline,
            description: submission.description,
            logo_url: submission.logo_url,
            website_url: submission.website_url,
            categories,
            rating: 0.0,
            review_count: 0,
            upvotes: 0,
            status: ProductStatus::Pending,
            vendor_id: Some(vendor_email.to_string()),
            made_in: submission.made_in,
            deal: None,
            reviews: Vec::new(),
            gallery: submission.gallery,
        })
    }

    /// Prepends a review and recomputes `rating` and `review_count` together.
    pub fn push_review(&mut self, review: Review) {
        self.reviews.insert(0, review);
        self.review_count = self.reviews.len() as u32;
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        self.rating = f64::from(total) / f64::from(self.review_count);
    }

    pub fn is_listed(&self) -> bool {
        self.status == ProductStatus::Approved
    }

    pub fn has_category_slug(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| category_slug(c) == slug)
    }
}

/// Slug used in `/products#<slug>` links: lowercase, every whitespace run
/// (leading and trailing included) as one `-`.
pub fn category_slug(category: &str) -> String {
    let mut slug = String::with_capacity(category.len());
    let mut in_whitespace = false;
    for c in category.to_lowercase().chars() {
        if is_js_whitespace(c) {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug
}
