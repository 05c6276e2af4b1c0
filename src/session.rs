use log::{debug, info};
use uuid::Uuid;

use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::models::{Account, Session};
use crate::storage::AccountStore;

#[derive(Default)]
pub struct SessionService {
    active: Option<Uuid>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the credentials and makes the new session the active one,
    /// replacing any session that was active before.
    pub fn login<S: AccountStore>(
        &mut self,
        directory: &UserDirectory<S>,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let account = directory
            .find(username)
            .filter(|account| account.authenticate(password))
            .ok_or_else(|| {
                debug!("Login failed for {}", username);
                AuthError::InvalidCredentials
            })?;

        let session = Session::new(account.clone());
        self.active = Some(session.id);
        info!("{} logged in (session {})", username, session.id);
        Ok(session)
    }

    /// Ends `session` if it is the active one. Stale handles are ignored.
    pub fn logout(&mut self, session: &Session) {
        if self.active == Some(session.id) {
            self.active = None;
            info!(
                "{} logged out after {}s",
                session.username(),
                session.duration().num_seconds()
            );
        }
    }

    pub fn is_active(&self, session: &Session) -> bool {
        self.active == Some(session.id)
    }

    pub fn verify<'s>(&self, session: &'s Session) -> Result<&'s Account, AuthError> {
        if self.is_active(session) {
            Ok(&session.account)
        } else {
            Err(AuthError::NoActiveSession)
        }
    }
}
