pub mod checklist_repo;
pub mod session_repo;
pub mod user_repo;

pub use checklist_repo::SqliteChecklistRepository;
pub use session_repo::SqliteSessionRepository;
pub use user_repo::SqliteUserRepository;
