mod calculator;
mod history;

#[cfg(test)]
mod calculator_test;

pub use calculator::{
    compute_streaks, compute_streaks_keyed, current_streak, StreakSummary, MAX_WALK_DAYS,
};
pub use history::ChecklistHistory;
