use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::activity::{format_date, Activity};
use crate::shared::DomainError;

/// Completion flags for the streak-tracked activities of one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFlags {
    pub pushups: bool,
    pub situps: bool,
    pub ab_crunches: bool,
    pub oiling: bool,
    pub facemask: bool,
}

impl ActivityFlags {
    pub fn get(&self, activity: Activity) -> bool {
        match activity {
            Activity::Pushups => self.pushups,
            Activity::Situps => self.situps,
            Activity::AbCrunches => self.ab_crunches,
            Activity::Oiling => self.oiling,
            Activity::Facemask => self.facemask,
        }
    }

    pub fn set(&mut self, activity: Activity, done: bool) {
        match activity {
            Activity::Pushups => self.pushups = done,
            Activity::Situps => self.situps = done,
            Activity::AbCrunches => self.ab_crunches = done,
            Activity::Oiling => self.oiling = done,
            Activity::Facemask => self.facemask = done,
        }
    }

    pub fn completed(&self) -> impl Iterator<Item = Activity> + '_ {
        Activity::ALL.into_iter().filter(|a| self.get(*a))
    }

    /// Reject any activity marked done on a day it is not eligible.
    pub fn validate_for(&self, date: NaiveDate) -> Result<(), DomainError> {
        match self.completed().find(|a| !a.is_eligible_on(date)) {
            Some(activity) => Err(DomainError::IneligibleActivity(format!(
                "{} (got {})",
                activity.rule_description(),
                format_date(date)
            ))),
            None => Ok(()),
        }
    }
}

/// One user's checklist for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistEntry {
    username: String,
    date: NaiveDate,
    flags: ActivityFlags,
    cigarettes: u32,
    steps: Option<u32>,
    updated_at: DateTime<Utc>,
}

impl ChecklistEntry {
    /// Build a validated entry ready to be upserted.
    pub fn new(
        username: String,
        date: NaiveDate,
        flags: ActivityFlags,
        cigarettes: u32,
        steps: Option<u32>,
    ) -> Result<Self, DomainError> {
        if username.trim().is_empty() {
            return Err(DomainError::Validation(
                "Checklist owner cannot be empty".to_string(),
            ));
        }

        flags.validate_for(date)?;

        Ok(Self {
            username,
            date,
            flags,
            cigarettes,
            steps,
            updated_at: Utc::now(),
        })
    }

    /// Blank checklist returned for a day that has not been logged yet.
    pub fn empty(username: String, date: NaiveDate) -> Self {
        Self {
            username,
            date,
            flags: ActivityFlags::default(),
            cigarettes: 0,
            steps: None,
            updated_at: Utc::now(),
        }
    }

    pub fn restore(
        username: String,
        date: NaiveDate,
        flags: ActivityFlags,
        cigarettes: u32,
        steps: Option<u32>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            date,
            flags,
            cigarettes,
            steps,
            updated_at,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn flags(&self) -> &ActivityFlags {
        &self.flags
    }

    pub fn is_done(&self, activity: Activity) -> bool {
        self.flags.get(activity)
    }

    pub fn cigarettes(&self) -> u32 {
        self.cigarettes
    }

    pub fn steps(&self) -> Option<u32> {
        self.steps
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
