use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::SessionClient;
use crate::domain::User;
use crate::error::SessionError;
use crate::messages::{ServiceResponse, SessionRequest};

/// Holds the signed-in user, if any. Nothing outlives the session.
pub struct SessionService {
    receiver: mpsc::Receiver<SessionRequest>,
    current: Option<User>,
}

impl SessionService {
    pub fn new(buffer_size: usize) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            current: None,
        };
        (service, SessionClient::new(sender))
    }

    #[instrument(name = "session_service", skip(self))]
    pub async fn run(mut self) {
        info!("SessionService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::CurrentUser { respond_to } => {
                    let _ = respond_to.send(Ok(self.current.clone()));
                }
                SessionRequest::Login { user, respond_to } => {
                    self.handle_login(user, respond_to);
                }
                SessionRequest::Logout { respond_to } => {
                    self.handle_logout(respond_to);
                }
                SessionRequest::UpdateProfile { user, respond_to } => {
                    self.handle_update_profile(user, respond_to);
                }
                SessionRequest::Shutdown => {
                    info!("SessionService shutting down");
                    break;
                }
            }
        }

        info!("SessionService stopped");
    }

    #[instrument(fields(user_email = %user.email, is_admin = user.is_admin), skip(self, user, respond_to))]
    fn handle_login(&mut self, user: User, respond_to: ServiceResponse<(), SessionError>) {
        debug!("Processing login request");

        let result = validate(&user).map(|()| {
            self.current = Some(user);
            info!("User signed in");
        });
        if let Err(e) = &result {
            warn!(error = %e, "Login rejected");
        }

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_logout(&mut self, respond_to: ServiceResponse<Option<User>, SessionError>) {
        debug!("Processing logout request");

        let previous = self.current.take();
        match &previous {
            Some(user) => info!(user_email = %user.email, "User signed out"),
            None => debug!("Nobody was signed in"),
        }

        let _ = respond_to.send(Ok(previous));
    }

    /// Replaces name and email. The admin flag stays what it was at login.
    #[instrument(fields(user_email = %user.email), skip(self, user, respond_to))]
    fn handle_update_profile(&mut self, user: User, respond_to: ServiceResponse<User, SessionError>) {
        debug!("Processing update_profile request");

        let result = match self.current.as_mut() {
            None => Err(SessionError::NotSignedIn),
            Some(current) => validate(&user).map(|()| {
                current.name = user.name;
                current.email = user.email;
                info!("Profile updated");
                current.clone()
            }),
        };
        if let Err(e) = &result {
            warn!(error = %e, "Profile update rejected");
        }

        let _ = respond_to.send(result);
    }
}

fn validate(user: &User) -> Result<(), SessionError> {
    if user.name.trim().is_empty() {
        return Err(SessionError::ValidationError("Name required".to_string()));
    }
    if user.email.trim().is_empty() {
        return Err(SessionError::ValidationError("Email required".to_string()));
    }
    Ok(())
}
