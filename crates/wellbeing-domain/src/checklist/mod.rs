mod activity;
mod entry;
mod repository;


pub use activity::{format_date, is_eligible, parse_date, Activity, DATE_FORMAT};
pub use entry::{ActivityFlags, ChecklistEntry};
pub use repository::ChecklistRepository;
