use async_trait::async_trait;
use chrono::Duration;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::*;
use crate::application::utils::run_blocking;
use wellbeing_domain::session::{Session, SessionRepository};
use wellbeing_domain::shared::DomainError;
use wellbeing_domain::user::UserRepository;
use wellbeing_infrastructure::security::{PasswordHasher, TokenGenerator};

const BAD_CREDENTIALS: &str = "Incorrect username or password";

/// Login command handler: verifies the password and opens a bearer session
pub struct LoginCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    hasher: Arc<PasswordHasher>,
    tokens: TokenGenerator,
    token_ttl: Duration,
}

impl LoginCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        hasher: Arc<PasswordHasher>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            hasher,
            tokens: TokenGenerator::new(),
            token_ttl,
        }
    }
}

#[async_trait]
impl CommandHandler<LoginCommand> for LoginCommandHandler {
    type Result = LoginResult;

    async fn handle(&self, cmd: LoginCommand) -> Result<Self::Result, DomainError> {
        let username = cmd.username.trim();

        let Some(user) = self.user_repo.find_by_username(username).await? else {
            warn!("[auth] login for unknown user: {}", username);
            return Err(DomainError::InvalidCredentials(BAD_CREDENTIALS.to_string()));
        };

        let hasher = self.hasher.clone();
        let password = cmd.password;
        let stored_hash = user.password_hash().to_string();
        let matches = run_blocking(move || hasher.verify(&password, &stored_hash)).await?;
        if !matches {
            warn!("[auth] wrong password for user: {}", username);
            return Err(DomainError::InvalidCredentials(BAD_CREDENTIALS.to_string()));
        }

        let issued = self.tokens.issue();
        let session = Session::issue(
            user.username().to_string(),
            issued.token_hash,
            self.token_ttl,
        )?;
        self.session_repo.save(&session).await?;

        info!(
            "[auth] session opened for {} until {}",
            user.username(),
            session.expires_at()
        );

        Ok(LoginResult {
            access_token: issued.token,
            expires_at: session.expires_at(),
        })
    }
}
