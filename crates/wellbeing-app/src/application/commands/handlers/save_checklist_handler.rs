use async_trait::async_trait;
use chrono::Local;
use log::{debug, info};
use std::sync::Arc;

use crate::application::commands::checklist_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use wellbeing_domain::checklist::{format_date, parse_date, ChecklistEntry, ChecklistRepository};
use wellbeing_domain::shared::DomainError;

/// Save checklist command handler
pub struct SaveChecklistCommandHandler {
    checklist_repo: Arc<dyn ChecklistRepository>,
}

impl SaveChecklistCommandHandler {
    pub fn new(checklist_repo: Arc<dyn ChecklistRepository>) -> Self {
        Self { checklist_repo }
    }
}

#[async_trait]
impl CommandHandler<SaveChecklistCommand> for SaveChecklistCommandHandler {
    type Result = SaveChecklistResult;

    async fn handle(&self, cmd: SaveChecklistCommand) -> Result<Self::Result, DomainError> {
        let date = match cmd.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => Local::now().date_naive(),
        };

        debug!(
            "[checklist] save for {} on {}: {:?}",
            cmd.username,
            format_date(date),
            cmd.flags
        );

        // Rejects grooming tasks on ineligible weekdays
        let entry = ChecklistEntry::new(
            cmd.username,
            date,
            cmd.flags,
            cmd.cigarettes,
            cmd.steps,
        )?;
        self.checklist_repo.save(&entry).await?;

        info!(
            "[checklist] saved {} for {}",
            format_date(date),
            entry.username()
        );

        Ok(SaveChecklistResult {
            date: format_date(date),
        })
    }
}
