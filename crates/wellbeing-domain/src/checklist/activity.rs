use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Wire format for every date crossing the domain boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const EVERY_DAY: &[Weekday] = &[
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Streak-tracked habits recorded on the daily checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Pushups,
    Situps,
    AbCrunches,
    Oiling,
    Facemask,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Pushups,
        Activity::Situps,
        Activity::AbCrunches,
        Activity::Oiling,
        Activity::Facemask,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Pushups => "pushups",
            Activity::Situps => "situps",
            Activity::AbCrunches => "ab_crunches",
            Activity::Oiling => "oiling",
            Activity::Facemask => "facemask",
        }
    }

    /// Fixed eligibility table.
    pub fn eligible_weekdays(&self) -> &'static [Weekday] {
        match self {
            Activity::Oiling => &[Weekday::Tue, Weekday::Sat],
            Activity::Facemask => &[Weekday::Wed, Weekday::Sat],
            Activity::Pushups | Activity::Situps | Activity::AbCrunches => EVERY_DAY,
        }
    }

    pub fn is_eligible_on(&self, date: NaiveDate) -> bool {
        self.eligible_weekdays().contains(&date.weekday())
    }

    pub fn is_every_day(&self) -> bool {
        self.eligible_weekdays().len() == EVERY_DAY.len()
    }

    /// Human readable rule, used as the rejection reason on save.
    ///
    /// e.g. "Oiling is only allowed on Tuesdays and Saturdays"
    pub fn rule_description(&self) -> String {
        if self.is_every_day() {
            return format!("{} is allowed every day", self.display_name());
        }

        let days: Vec<String> = self
            .eligible_weekdays()
            .iter()
            .map(|d| format!("{}s", weekday_name(*d)))
            .collect();

        let joined = match days.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
            Some((last, _)) => last.clone(),
            None => String::new(),
        };

        format!("{} is only allowed on {}", self.display_name(), joined)
    }

    fn display_name(&self) -> &'static str {
        match self {
            Activity::Pushups => "Push-ups",
            Activity::Situps => "Sit-ups",
            Activity::AbCrunches => "Ab crunches",
            Activity::Oiling => "Oiling",
            Activity::Facemask => "Facemask",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown activity: {}", s)))
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting anything else with `InvalidDate`.
///
/// Month and day must be zero-padded; chrono alone would accept `2024-1-5`.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        DomainError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date ({})", value, e))
    })?;

    if format_date(date) != value {
        return Err(DomainError::InvalidDate(format!(
            "'{}' is not a YYYY-MM-DD date (expected {})",
            value,
            format_date(date)
        )));
    }

    Ok(date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whether `activity` may be checked on `date`.
///
/// Identifiers outside the tracked set are always eligible. A malformed date is
/// an error, never a silent yes or no.
pub fn is_eligible(activity: &str, date: &str) -> Result<bool, DomainError> {
    let date = parse_date(date)?;

    Ok(match activity.parse::<Activity>() {
        Ok(known) => known.is_eligible_on(date),
        Err(_) => true,
    })
}
