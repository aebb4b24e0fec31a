use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use wellbeing_domain::session::SessionRepository;
use wellbeing_domain::shared::DomainError;
use wellbeing_domain::user::UserRepository;
use wellbeing_infrastructure::security::hash_token;

const INVALID_TOKEN: &str = "Could not validate credentials";

/// Resolves bearer tokens to usernames
pub struct AuthService {
    session_repo: Arc<dyn SessionRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(
        session_repo: Arc<dyn SessionRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            session_repo,
            user_repo,
        }
    }

    /// Username owning a live session for `token`.
    ///
    /// Unknown, expired and orphaned tokens all fail the same way.
    pub async fn authenticate(&self, token: &str) -> Result<String, DomainError> {
        if token.is_empty() {
            return Err(DomainError::InvalidCredentials(INVALID_TOKEN.to_string()));
        }

        let Some(session) = self.session_repo.find_by_token_hash(&hash_token(token)).await? else {
            debug!("[auth] unknown bearer token");
            return Err(DomainError::InvalidCredentials(INVALID_TOKEN.to_string()));
        };

        if !session.is_valid() {
            debug!("[auth] expired session for {}", session.username());
            return Err(DomainError::SessionExpired(INVALID_TOKEN.to_string()));
        }

        if self
            .user_repo
            .find_by_username(session.username())
            .await?
            .is_none()
        {
            debug!("[auth] session owner {} no longer exists", session.username());
            return Err(DomainError::InvalidCredentials(INVALID_TOKEN.to_string()));
        }

        Ok(session.username().to_string())
    }

    /// Drop expired sessions; returns how many went away
    pub async fn purge_expired_sessions(&self) -> Result<u64, DomainError> {
        let removed = self.session_repo.delete_expired(Utc::now()).await?;
        if removed > 0 {
            info!("[auth] purged {} expired sessions", removed);
        }
        Ok(removed)
    }
}
