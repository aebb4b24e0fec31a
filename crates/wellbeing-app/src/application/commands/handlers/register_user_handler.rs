use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::*;
use crate::application::utils::run_blocking;
use wellbeing_domain::shared::DomainError;
use wellbeing_domain::user::{User, UserRepository};
use wellbeing_infrastructure::security::PasswordHasher;

/// Register user command handler
pub struct RegisterUserCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<PasswordHasher>,
}

impl RegisterUserCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }
}

#[async_trait]
impl CommandHandler<RegisterUserCommand> for RegisterUserCommandHandler {
    type Result = RegisterUserResult;

    async fn handle(&self, cmd: RegisterUserCommand) -> Result<Self::Result, DomainError> {
        let username = cmd.username.trim().to_string();
        let email = cmd.email.trim().to_string();
        info!("[auth] registering user: {}", username);

        if cmd.password.is_empty() {
            return Err(DomainError::Validation(
                "Password cannot be empty".to_string(),
            ));
        }

        // 1. Uniqueness, username first
        if self.user_repo.find_by_username(&username).await?.is_some() {
            warn!("[auth] username already taken: {}", username);
            return Err(DomainError::AlreadyRegistered(
                "Username already registered".to_string(),
            ));
        }
        if self.user_repo.find_by_email(&email).await?.is_some() {
            warn!("[auth] email already taken, rejected user: {}", username);
            return Err(DomainError::AlreadyRegistered(
                "Email already registered".to_string(),
            ));
        }

        // 2. Hash and build the aggregate
        let hasher = self.hasher.clone();
        let password = cmd.password;
        let password_hash = run_blocking(move || hasher.hash(&password)).await?;
        let user = User::new(username, email, password_hash)?;

        // 3. Save; a concurrent registration can still win the unique index
        match self.user_repo.save(&user).await {
            Ok(()) => {}
            Err(DomainError::Conflict(_)) => {
                return Err(DomainError::AlreadyRegistered(
                    "Username or email already registered".to_string(),
                ));
            }
            Err(e) => return Err(e),
        }

        info!("[auth] user registered: {} ({})", user.username(), user.id());

        Ok(RegisterUserResult {
            user_id: user.id().as_str().to_string(),
        })
    }
}
