use serde::Deserialize;

use crate::domain::{ModerationDecision, ProductStatus, ProductSubmission, Review, ReviewPayload, User};

/// Something the presentation layer asks the board to do.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "intent", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Intent {
    Upvote {
        product_id: String,
    },
    SubmitReview {
        product_id: String,
        payload: ReviewPayload,
    },
    SubmitProduct {
        submission: ProductSubmission,
    },
    Login {
        user: User,
    },
    Logout,
    UpdateProfile {
        user: User,
    },
    Moderate {
        product_id: String,
        decision: ModerationDecision,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Upvoted { upvotes: u32 },
    Reviewed(Review),
    Submitted(SubmissionReceipt),
    SignedIn,
    SignedOut,
    ProfileUpdated(User),
    Moderated(ProductStatus),
}

pub const SUBMISSION_ACKNOWLEDGMENT: &str =
    "Thank you for your submission! Our team will review your product shortly.";

/// Acknowledgment shown after a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub product_id: String,
    pub message: &'static str,
}

impl SubmissionReceipt {
    pub fn new(product_id: String) -> Self {
        Self {
            product_id,
            message: SUBMISSION_ACKNOWLEDGMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intents_deserialize_from_presentation_json() {
        let intent: Intent = serde_json::from_str(r#"{"intent":"upvote","productId":"craftnote"}"#).unwrap();
        assert_eq!(intent, Intent::Upvote { product_id: "craftnote".into() });

        let intent: Intent = serde_json::from_str(
            r#"{"intent":"moderate","productId":"rocket","decision":"approved"}"#,
        )
        .unwrap();
        assert_eq!(
            intent,
            Intent::Moderate { product_id: "rocket".into(), decision: ModerationDecision::Approved }
        );

        let intent: Intent = serde_json::from_str(
            r#"{"intent":"login","user":{"name":"Jane","email":"jane@doe.com"}}"#,
        )
        .unwrap();
        assert_eq!(intent, Intent::Login { user: User::new("Jane", "jane@doe.com") });

        let intent: Intent = serde_json::from_str(r#"{"intent":"logout"}"#).unwrap();
        assert_eq!(intent, Intent::Logout);

        let intent: Intent = serde_json::from_str(
            r#"{"intent":"submit-review","productId":"craftnote","payload":{"rating":4,"title":"Neat","comment":"Works"}}"#,
        )
        .unwrap();
        assert_eq!(
            intent,
            Intent::SubmitReview { product_id: "craftnote".into(), payload: ReviewPayload::new(4, "Neat", "Works") }
        );
    }

    #[test]
    fn test_snake_case_fields_are_rejected() {
        let result = serde_json::from_str::<Intent>(r#"{"intent":"upvote","product_id":"craftnote"}"#);
        assert!(result.is_err());
    }
}
