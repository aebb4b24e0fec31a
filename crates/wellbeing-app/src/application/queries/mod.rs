mod checklist_queries;
mod streak_queries;


pub use checklist_queries::ChecklistQueryService;
pub use streak_queries::StreakQueryService;
