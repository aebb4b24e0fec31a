mod repository;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, SessionId};

pub use repository::SessionRepository;

/// Bearer session issued at login.
///
/// Only a digest of the token is kept; the raw token is handed to the client
/// once and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    username: String,
    token_hash: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    pub fn new(
        username: String,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if username.is_empty() {
            return Err(DomainError::Validation(
                "Session owner cannot be empty".to_string(),
            ));
        }

        if token_hash.is_empty() {
            return Err(DomainError::Validation(
                "Session token cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: SessionId::new(),
            username,
            token_hash,
            expires_at,
            created_at: Utc::now(),
        })
    }

    /// Create a session that expires `ttl` from now
    pub fn issue(username: String, token_hash: String, ttl: Duration) -> Result<Self, DomainError> {
        Self::new(username, token_hash, Utc::now() + ttl)
    }

    /// Restore session from persistence
    pub fn restore(
        id: SessionId,
        username: String,
        token_hash: String,
        expires_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            token_hash,
            expires_at,
            created_at,
        }
    }

    /// Check if session is still valid
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Mark session as expired
    pub fn expire(&mut self) {
        self.expires_at = Utc::now() - Duration::seconds(1);
    }

    // Getters
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token_hash(&self) -> &str {
        &self.token_hash
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
