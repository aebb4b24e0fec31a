use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::checklist::{parse_date, ActivityFlags, ChecklistEntry};
use crate::shared::DomainError;

/// Read-only snapshot of one user's checklist, indexed by day.
#[derive(Debug, Clone, Default)]
pub struct ChecklistHistory {
    days: BTreeMap<NaiveDate, ActivityFlags>,
}

impl ChecklistHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index stored entries by date; input order is irrelevant.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a ChecklistEntry>,
    {
        let mut history = Self::new();
        for entry in entries {
            history.insert(entry.date(), *entry.flags());
        }
        history
    }

    /// Build from `YYYY-MM-DD` keys. Any malformed key fails the whole batch.
    pub fn from_keyed<I, K>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, ActivityFlags)>,
        K: AsRef<str>,
    {
        let mut history = Self::new();
        for (key, flags) in entries {
            history.insert(parse_date(key.as_ref())?, flags);
        }
        Ok(history)
    }

    /// Last write for a day wins.
    pub fn insert(&mut self, date: NaiveDate, flags: ActivityFlags) {
        self.days.insert(date, flags);
    }

    pub fn get(&self, date: NaiveDate) -> Option<&ActivityFlags> {
        self.days.get(&date)
    }

    pub fn earliest(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
