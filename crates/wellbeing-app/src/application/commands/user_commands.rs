use chrono::{DateTime, Utc};

use crate::application::commands::command_handler::Command;

/// Register user command
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Command for RegisterUserCommand {}

/// Register user command result
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user_id: String,
}

/// Login command
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl Command for LoginCommand {}

/// Login command result. The raw token only ever leaves through here.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}
