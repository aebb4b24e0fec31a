use async_trait::async_trait;

use super::User;
use crate::shared::DomainError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Duplicate usernames or emails surface as `Conflict`.
    async fn save(&self, user: &User) -> Result<(), DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
}
