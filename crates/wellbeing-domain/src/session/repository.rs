use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::Session;
use crate::shared::DomainError;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Look up a session by the digest of its bearer token.
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError>;

    /// Remove sessions that expired before `now`. Returns how many were removed.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;
}
