use crate::application::commands::command_handler::Command;
use wellbeing_domain::checklist::ActivityFlags;

/// Save (upsert) the checklist of one day
#[derive(Debug, Clone)]
pub struct SaveChecklistCommand {
    pub username: String,
    /// `YYYY-MM-DD`; `None` means today
    pub date: Option<String>,
    pub flags: ActivityFlags,
    pub cigarettes: u32,
    pub steps: Option<u32>,
}

impl Command for SaveChecklistCommand {}

/// Save checklist command result
#[derive(Debug, Clone)]
pub struct SaveChecklistResult {
    pub date: String,
}
