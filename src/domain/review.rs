use serde::{Deserialize, Serialize};

use super::user::User;
use crate::error::CatalogError;

/// A review left on a product. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub author: String,
    pub avatar_url: String,
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub date: String,
    pub is_verified: bool,
}

/// What the review form sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub rating: u8,
    pub title: String,
    pub comment: String,
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

impl ReviewPayload {
    pub fn new(rating: u8, title: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            rating,
            title: title.into(),
            comment: comment.into(),
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(CatalogError::InvalidPayload(format!(
                "rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, self.rating
            )));
        }
        Ok(())
    }
}

impl Review {
    /// A fresh, unverified review written by `author` right now.
    pub fn written_by(id: u64, author: &User, payload: ReviewPayload) -> Self {
        Self {
            id,
            author: author.name.clone(),
            avatar_url: format!("https://i.pravatar.cc/48?u={}", author.email),
            rating: payload.rating,
            title: payload.title,
            comment: payload.comment,
            date: "Just now".to_string(),
            is_verified: false,
        }
    }
}
