mod actors;
mod app_system;
mod catalog;
mod clients;
mod config;
mod domain;
mod error;
mod messages;
mod router;
mod seed;

#[cfg(test)]
mod mock_framework;

use chrono::Utc;
use clap::Parser;
use tracing::{debug, error, info, Instrument};

use crate::app_system::{setup_tracing, BoardSystem, Intent, Outcome};
use crate::config::Settings;
use crate::domain::{ModerationDecision, ReviewPayload, SubmissionForm, User};
use crate::router::{Navigator, ViewDescriptor};
use crate::seed::{Seed, SAMPLE_BUYER_EMAIL};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::parse();
    setup_tracing(&settings.log_filter);

    let seed = Seed::load(Utc::now())?;
    let mut board = BoardSystem::new(&settings, seed);

    let span = tracing::info_span!("browse");
    async {
        show(&mut board).await?;
        board.on_hash_change("#/product/querymaster");
        show(&mut board).await?;
        board.on_hash_change("#/dashboard");
        show(&mut board).await
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("buyer");
    async {
        board.login(User::new("Jane Doe", SAMPLE_BUYER_EMAIL)).await?;

        board.on_hash_change("#/dashboard");
        if let ViewDescriptor::Dashboard { subscriptions, .. } = board.current_view().await? {
            for entry in &subscriptions {
                info!(
                    product = %entry.product.name,
                    status = ?entry.status_at(Utc::now(), settings.expiry_window()),
                    "Subscription"
                );
            }
        }

        let review = ReviewPayload::new(5, "Indispensable", "Replaced three tools for our team.");
        let review = board.submit_review("querymaster".to_string(), review).await?;
        info!(review_id = review.id, "Review posted");

        let form = SubmissionForm {
            product_name: "Rocket Notes".to_string(),
            tagline: "Notes at launch speed".to_string(),
            description: "A scratchpad that syncs before you finish typing.".to_string(),
            website_url: "https://rocketnotes.example.com".to_string(),
            categories: "Productivity, Writing".to_string(),
            logo_url: "https://rocketnotes.example.com/logo.png".to_string(),
            gallery_urls: String::new(),
        };
        let receipt = board.submit_product(form.into()).await?;
        info!(product_id = %receipt.product_id, "{}", receipt.message);

        board.logout().await
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("moderation");
    async {
        board.login(User::admin("Admin", "admin@launchboard.dev")).await?;
        board.on_hash_change("#/admin");
        show(&mut board).await?;

        let intent = Intent::Moderate {
            product_id: "rocket-notes".to_string(),
            decision: ModerationDecision::Approved,
        };
        match board.dispatch(intent).await {
            Ok(Outcome::Moderated(status)) => info!(%status, "Product moderated"),
            Ok(other) => debug!(?other, "Unexpected outcome"),
            Err(e) => error!(error = %e, "Moderation failed"),
        }

        board.on_hash_change("#/products#productivity");
        show(&mut board).await
    }
    .instrument(span)
    .await?;

    board.shutdown().await;

    info!("Launch board finished");
    Ok(())
}

async fn show<N: Navigator>(board: &mut BoardSystem<N>) -> Result<(), Box<dyn std::error::Error>> {
    let view = board.current_view().await?;
    info!(location = %board.location(), view = ?view.tag(), "Rendered view");
    debug!(view = %serde_json::to_string(&view)?, "View data");
    Ok(())
}
