use tracing::{debug, error, info, instrument, warn};

use super::intent::{Intent, Outcome, SubmissionReceipt};
use crate::actors::{CatalogService, SessionService};
use crate::clients::{CatalogClient, SessionClient};
use crate::config::Settings;
use crate::domain::{ModerationDecision, ProductStatus, ProductSubmission, Review, ReviewPayload, User};
use crate::error::BoardError;
use crate::router::{resolve, HashLocation, Navigator, Route, ViewDescriptor};
use crate::seed::Seed;

/// Runs the catalog and session services and sits between them and the
/// presentation layer: resolves the current location to a view and turns
/// intents into service requests.
pub struct BoardSystem<N: Navigator = HashLocation> {
    pub catalog_client: CatalogClient,
    pub session_client: SessionClient,
    navigator: N,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BoardSystem<HashLocation> {
    /// Starts both services on the current runtime.
    #[instrument(name = "board_system", skip_all)]
    pub fn new(settings: &Settings, seed: Seed) -> Self {
        let mut handles = Vec::new();

        info!("Starting launch board");

        let (catalog_service, catalog_client) = CatalogService::new(settings.channel_buffer, seed);
        handles.push(tokio::spawn(catalog_service.run()));

        let (session_service, session_client) = SessionService::new(settings.channel_buffer);
        handles.push(tokio::spawn(session_service.run()));

        info!("Launch board started");

        Self {
            catalog_client,
            session_client,
            navigator: HashLocation::new(settings.start_location.clone()),
            handles,
        }
    }
}

impl<N: Navigator> BoardSystem<N> {
    /// Wires the board to existing clients; nothing is spawned.
    pub fn with_clients(catalog_client: CatalogClient, session_client: SessionClient, navigator: N) -> Self {
        Self {
            catalog_client,
            session_client,
            navigator,
            handles: Vec::new(),
        }
    }

    pub fn location(&self) -> &str {
        self.navigator.location()
    }

    /// The location changed outside the board (a followed link, the back button).
    pub fn on_hash_change(&mut self, fragment: &str) {
        self.navigator.set_location(fragment);
    }

    /// Resolves the current location, applying any redirect to the navigator.
    #[instrument(skip(self), fields(location = %self.navigator.location()))]
    pub async fn current_view(&mut self) -> Result<ViewDescriptor, BoardError> {
        let user = self.session_client.current_user().await?;
        let catalog = self.catalog_client.snapshot().await?;

        let resolution = resolve(self.navigator.location(), user.as_ref(), &catalog);
        debug!(route = %resolution.route, view = ?resolution.view.tag(), "Resolved location");
        if let Some(route) = &resolution.redirect {
            info!(to = %route, "Redirecting");
            self.navigator.navigate(route);
        }
        Ok(resolution.view)
    }

    #[instrument(skip(self))]
    pub async fn dispatch(&mut self, intent: Intent) -> Result<Outcome, BoardError> {
        let outcome = match intent {
            Intent::Upvote { product_id } => self.upvote(product_id).await.map(|upvotes| Outcome::Upvoted { upvotes }),
            Intent::SubmitReview { product_id, payload } => {
                self.submit_review(product_id, payload).await.map(Outcome::Reviewed)
            }
            Intent::SubmitProduct { submission } => self.submit_product(submission).await.map(Outcome::Submitted),
            Intent::Login { user } => self.login(user).await.map(|()| Outcome::SignedIn),
            Intent::Logout => self.logout().await.map(|()| Outcome::SignedOut),
            Intent::UpdateProfile { user } => self.update_profile(user).await.map(Outcome::ProfileUpdated),
            Intent::Moderate { product_id, decision } => {
                self.moderate(product_id, decision).await.map(Outcome::Moderated)
            }
        };
        if let Err(e) = &outcome {
            warn!(error = %e, "Intent had no effect");
        }
        outcome
    }

    pub async fn upvote(&self, product_id: String) -> Result<u32, BoardError> {
        Ok(self.catalog_client.upvote(product_id).await?)
    }

    /// Reviews are written as the signed-in user; without one the catalog
    /// refuses the review.
    #[instrument(fields(product_id = %product_id), skip(self, payload))]
    pub async fn submit_review(&self, product_id: String, payload: ReviewPayload) -> Result<Review, BoardError> {
        let author = self.session_client.current_user().await?;
        Ok(self.catalog_client.submit_review(product_id, author, payload).await?)
    }

    /// Submits a product as the signed-in user and returns to the home page.
    #[instrument(fields(product_name = %submission.name), skip(self, submission))]
    pub async fn submit_product(&mut self, submission: ProductSubmission) -> Result<SubmissionReceipt, BoardError> {
        let vendor = self.session_client.current_user().await?;
        let product_id = self.catalog_client.submit_product(vendor, submission).await?;
        self.navigator.navigate(&Route::Home);
        Ok(SubmissionReceipt::new(product_id))
    }

    #[instrument(fields(user_email = %user.email), skip(self, user))]
    pub async fn login(&mut self, user: User) -> Result<(), BoardError> {
        self.session_client.login(user).await?;
        self.navigator.navigate(&Route::Home);
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn logout(&mut self) -> Result<(), BoardError> {
        self.session_client.logout().await?;
        self.navigator.navigate(&Route::Home);
        Ok(())
    }

    pub async fn update_profile(&self, user: User) -> Result<User, BoardError> {
        Ok(self.session_client.update_profile(user).await?)
    }

    /// Moderates a product. The admin view is the only caller; this does not
    /// re-check who is signed in.
    pub async fn moderate(&self, product_id: String, decision: ModerationDecision) -> Result<ProductStatus, BoardError> {
        Ok(self.catalog_client.moderate(product_id, decision).await?)
    }

    /// Stops both services and waits for them to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) {
        info!("Shutting down launch board");

        if let Err(e) = self.catalog_client.shutdown().await {
            warn!(error = %e, "Catalog service already stopped");
        }
        if let Err(e) = self.session_client.shutdown().await {
            warn!(error = %e, "Session service already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
            }
        }

        info!("Launch board shutdown complete");
    }
}
