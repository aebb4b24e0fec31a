use std::sync::Arc;

use crate::application::dtos::ChecklistDto;
use wellbeing_domain::checklist::{parse_date, ChecklistEntry, ChecklistRepository};
use wellbeing_domain::shared::DomainError;

pub struct ChecklistQueryService {
    checklist_repo: Arc<dyn ChecklistRepository>,
}

impl ChecklistQueryService {
    pub fn new(checklist_repo: Arc<dyn ChecklistRepository>) -> Self {
        Self { checklist_repo }
    }

    /// Checklist a user logged on `date`, or a blank one for that date
    pub async fn get_for_date(
        &self,
        username: &str,
        date: &str,
    ) -> Result<ChecklistDto, DomainError> {
        let date = parse_date(date)?;

        let entry = match self.checklist_repo.find_by_date(username, date).await? {
            Some(entry) => entry,
            None => {
                log::debug!("[checklist] nothing logged by {} on {}", username, date);
                ChecklistEntry::empty(username.to_string(), date)
            }
        };

        Ok(ChecklistDto::from(&entry))
    }
}
