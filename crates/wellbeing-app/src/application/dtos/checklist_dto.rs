use serde::{Deserialize, Serialize};
use wellbeing_domain::checklist::{format_date, ActivityFlags, ChecklistEntry};

/// Checklist request body. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChecklistInput {
    pub pushups: bool,
    pub situps: bool,
    pub ab_crunches: bool,
    pub cigarettes: u32,
    pub oiling: bool,
    pub facemask: bool,
    pub steps: Option<u32>,
    pub date: Option<String>, // YYYY-MM-DD, defaults to today
}

impl ChecklistInput {
    pub fn flags(&self) -> ActivityFlags {
        ActivityFlags {
            pushups: self.pushups,
            situps: self.situps,
            ab_crunches: self.ab_crunches,
            oiling: self.oiling,
            facemask: self.facemask,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistDto {
    pub pushups: bool,
    pub situps: bool,
    pub ab_crunches: bool,
    pub cigarettes: u32,
    pub oiling: bool,
    pub facemask: bool,
    pub steps: Option<u32>,
    pub date: String, // YYYY-MM-DD
}

impl From<&ChecklistEntry> for ChecklistDto {
    fn from(entry: &ChecklistEntry) -> Self {
        let flags = entry.flags();
        Self {
            pushups: flags.pushups,
            situps: flags.situps,
            ab_crunches: flags.ab_crunches,
            cigarettes: entry.cigarettes(),
            oiling: flags.oiling,
            facemask: flags.facemask,
            steps: entry.steps(),
            date: format_date(entry.date()),
        }
    }
}
