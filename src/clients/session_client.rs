use tokio::sync::mpsc;

use crate::domain::User;
use crate::error::SessionError;
use crate::messages::SessionRequest;

/// Handle to the session service.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl_client_lifecycle!(SessionClient, SessionRequest, SessionError);

client_method!(SessionClient => fn current_user() -> Option<User> as SessionRequest::CurrentUser, Error = SessionError);
client_method!(SessionClient => fn login(user: User) -> () as SessionRequest::Login, Error = SessionError);
client_method!(SessionClient => fn logout() -> Option<User> as SessionRequest::Logout, Error = SessionError);
client_method!(SessionClient => fn update_profile(user: User) -> User as SessionRequest::UpdateProfile, Error = SessionError);
