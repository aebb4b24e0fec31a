mod auth_dto;
mod checklist_dto;
mod streak_dto;

pub use auth_dto::*;
pub use checklist_dto::*;
pub use streak_dto::*;

use serde::{Deserialize, Serialize};

/// `{ "message": ... }` acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
