use chrono::{Local, NaiveDate};
use std::sync::Arc;
use std::time::Instant;

use crate::application::dtos::StreakDto;
use wellbeing_domain::checklist::{parse_date, ChecklistRepository};
use wellbeing_domain::shared::DomainError;
use wellbeing_domain::streak::{self, ChecklistHistory, StreakSummary};

pub struct StreakQueryService {
    checklist_repo: Arc<dyn ChecklistRepository>,
}

impl StreakQueryService {
    pub fn new(checklist_repo: Arc<dyn ChecklistRepository>) -> Self {
        Self { checklist_repo }
    }

    /// Current streaks of `username` as of `reference_date`
    pub async fn compute_streaks(
        &self,
        username: &str,
        reference_date: NaiveDate,
    ) -> Result<StreakSummary, DomainError> {
        let start = Instant::now();

        let entries = self.checklist_repo.list_for_user(username).await?;
        let history = ChecklistHistory::from_entries(entries.iter());
        let summary = streak::compute_streaks(&history, reference_date);

        log::debug!(
            "[streak] {} as of {}: {:?} ({} days of history, {:.2}ms)",
            username,
            reference_date,
            summary,
            history.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(summary)
    }

    /// Streaks for the API: reference date is today unless overridden
    pub async fn get_streaks(
        &self,
        username: &str,
        reference_date: Option<&str>,
    ) -> Result<StreakDto, DomainError> {
        let reference = match reference_date {
            Some(raw) => parse_date(raw)?,
            None => Local::now().date_naive(),
        };

        Ok(self.compute_streaks(username, reference).await?.into())
    }
}
