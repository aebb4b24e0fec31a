use serde::{Deserialize, Serialize};
use wellbeing_domain::streak::StreakSummary;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakDto {
    pub pushups: u32,
    pub situps: u32,
    pub ab_crunches: u32,
    pub oiling: u32,
    pub facemask: u32,
}

impl From<StreakSummary> for StreakDto {
    fn from(summary: StreakSummary) -> Self {
        Self {
            pushups: summary.pushups,
            situps: summary.situps,
            ab_crunches: summary.ab_crunches,
            oiling: summary.oiling,
            facemask: summary.facemask,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreakParams {
    /// Reference date override, `YYYY-MM-DD`
    pub date: Option<String>,
}
