//! # Mock Framework
//!
//! Utilities for testing the board in isolation from the services.
//!
//! [`create_mock_catalog_client`] and [`create_mock_session_client`] hand back
//! a client plus the receiving end of its channel. Helpers such as
//! [`expect_current_user`] or [`expect_submit_review`] pull the next request,
//! assert its kind and return its parameters and responder, so a test decides
//! what the "service" answers.

use tokio::sync::mpsc;

use crate::catalog::CatalogSnapshot;
use crate::clients::{CatalogClient, SessionClient};
use crate::domain::{ModerationDecision, ProductStatus, ProductSubmission, Review, ReviewPayload, User};
use crate::error::{CatalogError, SessionError};
use crate::messages::{CatalogRequest, ServiceResponse, SessionRequest};

pub fn create_mock_catalog_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

pub fn create_mock_session_client(buffer_size: usize) -> (SessionClient, mpsc::Receiver<SessionRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Next message must be a CurrentUser query.
pub async fn expect_current_user(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<ServiceResponse<Option<User>, SessionError>> {
    match receiver.recv().await {
        Some(SessionRequest::CurrentUser { respond_to }) => Some(respond_to),
        _ => None,
    }
}

pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<ServiceResponse<CatalogSnapshot, CatalogError>> {
    match receiver.recv().await {
        Some(CatalogRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

pub async fn expect_submit_review(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(String, Option<User>, ReviewPayload, ServiceResponse<Review, CatalogError>)> {
    match receiver.recv().await {
        Some(CatalogRequest::SubmitReview { id, author, payload, respond_to }) => {
            Some((id, author, payload, respond_to))
        }
        _ => None,
    }
}

pub async fn expect_submit_product(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(Option<User>, ProductSubmission, ServiceResponse<String, CatalogError>)> {
    match receiver.recv().await {
        Some(CatalogRequest::SubmitProduct { vendor, submission, respond_to }) => Some((vendor, submission, respond_to)),
        _ => None,
    }
}

pub async fn expect_moderate(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(String, ModerationDecision, ServiceResponse<ProductStatus, CatalogError>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Moderate { id, decision, respond_to }) => Some((id, decision, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_catalog_client() {
        let (client, mut receiver) = create_mock_catalog_client(10);

        let moderate_task = tokio::spawn(async move {
            client.moderate("rocket".to_string(), ModerationDecision::Rejected).await
        });

        let (id, decision, responder) = expect_moderate(&mut receiver).await.expect("Expected Moderate request");
        assert_eq!(id, "rocket");
        assert_eq!(decision, ModerationDecision::Rejected);
        responder.send(Ok(ProductStatus::Rejected)).unwrap();

        let result = moderate_task.await.unwrap();
        assert_eq!(result, Ok(ProductStatus::Rejected));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (client, mut receiver) = create_mock_session_client(10);

        let task = tokio::spawn(async move { client.current_user().await });

        let responder = expect_current_user(&mut receiver).await.expect("Expected CurrentUser request");
        drop(responder);

        let result = task.await.unwrap();
        assert!(matches!(result, Err(SessionError::ActorCommunicationError(_))));
    }
}
