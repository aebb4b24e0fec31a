use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ChecklistHistory;
use crate::checklist::{parse_date, Activity, ActivityFlags};
use crate::shared::DomainError;

/// Hard ceiling on calendar days visited per activity (about ten years).
pub const MAX_WALK_DAYS: u32 = 3660;

/// Current streak for every tracked activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub pushups: u32,
    pub situps: u32,
    pub ab_crunches: u32,
    pub oiling: u32,
    pub facemask: u32,
}

impl StreakSummary {
    pub fn get(&self, activity: Activity) -> u32 {
        match activity {
            Activity::Pushups => self.pushups,
            Activity::Situps => self.situps,
            Activity::AbCrunches => self.ab_crunches,
            Activity::Oiling => self.oiling,
            Activity::Facemask => self.facemask,
        }
    }

    fn set(&mut self, activity: Activity, value: u32) {
        match activity {
            Activity::Pushups => self.pushups = value,
            Activity::Situps => self.situps = value,
            Activity::AbCrunches => self.ab_crunches = value,
            Activity::Oiling => self.oiling = value,
            Activity::Facemask => self.facemask = value,
        }
    }
}

/// Walk backward from `reference`, skipping ineligible days, counting
/// consecutive eligible days with the flag set. The first eligible day that is
/// missing or unchecked ends the walk.
///
/// The walk also ends once it passes the earliest logged day, since every
/// eligible day before it is necessarily missing.
pub fn current_streak(history: &ChecklistHistory, activity: Activity, reference: NaiveDate) -> u32 {
    let Some(earliest) = history.earliest() else {
        return 0;
    };

    let mut streak = 0;
    let mut day = reference;

    for _ in 0..MAX_WALK_DAYS {
        if day < earliest {
            break;
        }

        if activity.is_eligible_on(day) {
            match history.get(day) {
                Some(flags) if flags.get(activity) => streak += 1,
                _ => break,
            }
        }

        day = match day.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }

    streak
}

pub fn compute_streaks(history: &ChecklistHistory, reference: NaiveDate) -> StreakSummary {
    let mut summary = StreakSummary::default();
    for activity in Activity::ALL {
        summary.set(activity, current_streak(history, activity, reference));
    }
    summary
}

/// String boundary variant: `YYYY-MM-DD` keys and reference date.
pub fn compute_streaks_keyed<I, K>(
    entries: I,
    reference: &str,
) -> Result<StreakSummary, DomainError>
where
    I: IntoIterator<Item = (K, ActivityFlags)>,
    K: AsRef<str>,
{
    let reference = parse_date(reference)?;
    let history = ChecklistHistory::from_keyed(entries)?;
    Ok(compute_streaks(&history, reference))
}
