use async_trait::async_trait;
use chrono::NaiveDate;

use super::ChecklistEntry;
use crate::shared::DomainError;

#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// Save (upsert) the entry for its (username, date) key.
    ///
    /// A later save for the same day replaces the earlier one.
    async fn save(&self, entry: &ChecklistEntry) -> Result<(), DomainError>;

    /// Find the entry a user logged on a specific date.
    async fn find_by_date(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> Result<Option<ChecklistEntry>, DomainError>;

    /// List every entry for a user. No ordering is guaranteed.
    async fn list_for_user(&self, username: &str) -> Result<Vec<ChecklistEntry>, DomainError>;
}
