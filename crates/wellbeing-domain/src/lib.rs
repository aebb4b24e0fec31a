// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod checklist;
pub mod session;
pub mod shared;
pub mod streak;
pub mod user;

// Re-exports for convenience
pub use shared::{DomainError, SessionId, UserId};
