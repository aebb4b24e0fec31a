#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate, Weekday};

    use super::super::{
        compute_streaks, compute_streaks_keyed, current_streak, ChecklistHistory, StreakSummary,
    };
    use crate::checklist::{Activity, ActivityFlags, ChecklistEntry};
    use crate::shared::DomainError;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn only(activity: Activity) -> ActivityFlags {
        let mut flags = ActivityFlags::default();
        flags.set(activity, true);
        flags
    }

    fn all_done() -> ActivityFlags {
        ActivityFlags {
            pushups: true,
            situps: true,
            ab_crunches: true,
            oiling: true,
            facemask: true,
        }
    }

    #[test]
    fn test_empty_history_yields_zero_streaks() {
        let history = ChecklistHistory::new();
        let summary = compute_streaks(&history, date("2024-01-10"));
        assert_eq!(summary, StreakSummary::default());
    }

    #[test]
    fn test_three_consecutive_pushup_days() {
        let mut history = ChecklistHistory::new();
        history.insert(date("2024-01-08"), only(Activity::Pushups));
        history.insert(date("2024-01-09"), only(Activity::Pushups));
        history.insert(date("2024-01-10"), only(Activity::Pushups));

        let summary = compute_streaks(&history, date("2024-01-10"));
        assert_eq!(summary.pushups, 3);
        assert_eq!(summary.situps, 0);
        assert_eq!(summary.ab_crunches, 0);
    }

    #[test]
    fn test_unlogged_reference_day_breaks_daily_streak() {
        let mut history = ChecklistHistory::new();
        history.insert(date("2024-01-08"), only(Activity::Pushups));
        history.insert(date("2024-01-09"), only(Activity::Pushups));

        assert_eq!(current_streak(&history, Activity::Pushups, date("2024-01-10")), 0);
    }

    #[test]
    fn test_false_flag_on_reference_day_breaks_daily_streak() {
        let mut history = ChecklistHistory::new();
        history.insert(date("2024-01-08"), only(Activity::Situps));
        history.insert(date("2024-01-09"), only(Activity::Situps));
        history.insert(date("2024-01-10"), only(Activity::Pushups));

        assert_eq!(current_streak(&history, Activity::Situps, date("2024-01-10")), 0);
        assert_eq!(current_streak(&history, Activity::Pushups, date("2024-01-10")), 1);
    }

    #[test]
    fn test_gap_stops_the_walk() {
        let mut history = ChecklistHistory::new();
        history.insert(date("2024-01-05"), only(Activity::AbCrunches));
        history.insert(date("2024-01-06"), only(Activity::AbCrunches));
        // 2024-01-07 missing
        history.insert(date("2024-01-08"), only(Activity::AbCrunches));
        history.insert(date("2024-01-09"), only(Activity::AbCrunches));

        assert_eq!(current_streak(&history, Activity::AbCrunches, date("2024-01-09")), 2);
    }

    #[test]
    fn test_oiling_counts_saturday_and_previous_tuesday() {
        // 2024-01-13 is a Saturday, 2024-01-09 the Tuesday before it
        assert_eq!(date("2024-01-13").weekday(), Weekday::Sat);
        assert_eq!(date("2024-01-09").weekday(), Weekday::Tue);

        let mut history = ChecklistHistory::new();
        history.insert(date("2024-01-09"), only(Activity::Oiling));
        history.insert(date("2024-01-13"), only(Activity::Oiling));

        assert_eq!(current_streak(&history, Activity::Oiling, date("2024-01-13")), 2);
    }

    #[test]
    fn test_ineligible_days_neither_break_nor_extend() {
        let mut history = ChecklistHistory::new();
        history.insert(date("2024-01-09"), only(Activity::Oiling));
        // Ineligible days logged with other habits only
        for day in ["2024-01-10", "2024-01-11", "2024-01-12"] {
            history.insert(date(day), only(Activity::Pushups));
        }
        history.insert(date("2024-01-13"), all_done());

        assert_eq!(current_streak(&history, Activity::Oiling, date("2024-01-13")), 2);
    }

    #[test]
    fn test_facemask_wednesday_reference_skips_back_to_saturday() {
        let mut history = ChecklistHistory::new();
        history.insert(date("2024-01-10"), only(Activity::Facemask));
        history.insert(date("2024-01-06"), only(Activity::Facemask));

        let summary = compute_streaks(&history, date("2024-01-10"));
        assert_eq!(summary.facemask, 2);
        assert_eq!(summary.oiling, 0);
        assert_eq!(summary.pushups, 0);
    }

    #[test]
    fn test_ineligible_reference_day_starts_at_last_eligible_day() {
        // Reference Monday 2024-01-15; the last oiling days are Sat 13 and Tue 9
        let mut history = ChecklistHistory::new();
        history.insert(date("2024-01-09"), only(Activity::Oiling));
        history.insert(date("2024-01-13"), only(Activity::Oiling));

        assert_eq!(current_streak(&history, Activity::Oiling, date("2024-01-15")), 2);
    }

    #[test]
    fn test_missing_eligible_day_between_grooming_days_breaks() {
        // Tue 2024-01-09 was skipped
        let mut history = ChecklistHistory::new();
        history.insert(date("2024-01-06"), only(Activity::Oiling));
        history.insert(date("2024-01-13"), only(Activity::Oiling));

        assert_eq!(current_streak(&history, Activity::Oiling, date("2024-01-13")), 1);
    }

    #[test]
    fn test_streak_never_exceeds_eligible_days_since_first_entry() {
        let start = date("2024-01-01");
        let reference = date("2024-03-31");
        let mut history = ChecklistHistory::new();

        let mut day = start;
        while day <= reference {
            history.insert(day, all_done());
            day = day.succ_opt().unwrap();
        }

        let summary = compute_streaks(&history, reference);
        for activity in Activity::ALL {
            let mut eligible = 0;
            let mut d = start;
            while d <= reference {
                if activity.is_eligible_on(d) {
                    eligible += 1;
                }
                d = d.succ_opt().unwrap();
            }
            assert_eq!(summary.get(activity), eligible, "{}", activity);
        }
        assert_eq!(summary.pushups, 91);
    }

    #[test]
    fn test_long_unbroken_history_is_fully_counted() {
        let reference = date("2024-06-30");
        let mut history = ChecklistHistory::new();
        for offset in 0..1000 {
            history.insert(reference - Duration::days(offset), only(Activity::Pushups));
        }

        assert_eq!(current_streak(&history, Activity::Pushups, reference), 1000);
    }

    #[test]
    fn test_reference_before_history_is_zero() {
        let mut history = ChecklistHistory::new();
        history.insert(date("2024-02-01"), all_done());

        assert_eq!(compute_streaks(&history, date("2024-01-01")), StreakSummary::default());
    }

    #[test]
    fn test_entry_order_does_not_matter() {
        let days = ["2024-01-10", "2024-01-08", "2024-01-09"];
        let entries: Vec<ChecklistEntry> = days
            .iter()
            .map(|d| {
                ChecklistEntry::new("alice".to_string(), date(d), only(Activity::Pushups), 0, None)
                    .unwrap()
            })
            .collect();

        let forward = ChecklistHistory::from_entries(entries.iter());
        let backward = ChecklistHistory::from_entries(entries.iter().rev());

        assert_eq!(forward.len(), 3);
        assert_eq!(
            compute_streaks(&forward, date("2024-01-10")),
            compute_streaks(&backward, date("2024-01-10"))
        );
    }

    #[test]
    fn test_keyed_input_matches_typed_input() {
        let entries = vec![
            ("2024-01-10".to_string(), only(Activity::Facemask)),
            ("2024-01-06".to_string(), only(Activity::Facemask)),
        ];

        let summary = compute_streaks_keyed(entries, "2024-01-10").unwrap();
        assert_eq!(summary.facemask, 2);
    }

    #[test]
    fn test_keyed_input_rejects_malformed_date_key() {
        let entries = vec![("2024-13-40", only(Activity::Pushups))];
        let result = compute_streaks_keyed(entries, "2024-01-10");
        assert!(matches!(result, Err(DomainError::InvalidDate(_))));
    }

    #[test]
    fn test_keyed_input_rejects_malformed_reference() {
        let entries: Vec<(&str, ActivityFlags)> = Vec::new();
        let result = compute_streaks_keyed(entries, "yesterday");
        assert!(matches!(result, Err(DomainError::InvalidDate(_))));
    }

    #[test]
    fn test_summary_serializes_with_activity_names() {
        let summary = StreakSummary {
            pushups: 3,
            situps: 0,
            ab_crunches: 1,
            oiling: 2,
            facemask: 2,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["pushups"], 3);
        assert_eq!(json["ab_crunches"], 1);
        assert_eq!(json["facemask"], 2);
    }
}
