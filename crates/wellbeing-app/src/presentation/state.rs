use chrono::Duration;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{ChecklistQueryService, StreakQueryService};
use crate::application::services::AuthService;
use wellbeing_domain::checklist::ChecklistRepository;
use wellbeing_domain::session::SessionRepository;
use wellbeing_domain::user::UserRepository;
use wellbeing_infrastructure::persistence::repositories::{
    SqliteChecklistRepository, SqliteSessionRepository, SqliteUserRepository,
};
use wellbeing_infrastructure::security::PasswordHasher;

/// Command handlers container
pub struct CommandHandlers {
    pub register_user: RegisterUserCommandHandler,
    pub login: LoginCommandHandler,
    pub save_checklist: SaveChecklistCommandHandler,
}

pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionRepository>,
    pub checklist: Arc<dyn ChecklistRepository>,
}

pub struct Queries {
    pub checklist: ChecklistQueryService,
    pub streak: StreakQueryService,
}

pub struct Services {
    pub auth: AuthService,
}

/// Shared state handed to every axum handler
#[derive(Clone)]
pub struct AppState {
    pub commands: Arc<CommandHandlers>,
    pub queries: Arc<Queries>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Wire SQLite repositories into handlers, queries and services
    pub fn new(pool: SqlitePool, token_ttl: Duration) -> Self {
        let pool = Arc::new(pool);

        let repositories = Repositories {
            user: Arc::new(SqliteUserRepository::new(pool.clone())),
            session: Arc::new(SqliteSessionRepository::new(pool.clone())),
            checklist: Arc::new(SqliteChecklistRepository::new(pool)),
        };

        Self::from_repositories(repositories, token_ttl)
    }

    pub fn from_repositories(repositories: Repositories, token_ttl: Duration) -> Self {
        let hasher = Arc::new(PasswordHasher::new());

        let commands = CommandHandlers {
            register_user: RegisterUserCommandHandler::new(
                repositories.user.clone(),
                hasher.clone(),
            ),
            login: LoginCommandHandler::new(
                repositories.user.clone(),
                repositories.session.clone(),
                hasher,
                token_ttl,
            ),
            save_checklist: SaveChecklistCommandHandler::new(repositories.checklist.clone()),
        };

        let queries = Queries {
            checklist: ChecklistQueryService::new(repositories.checklist.clone()),
            streak: StreakQueryService::new(repositories.checklist.clone()),
        };

        let services = Services {
            auth: AuthService::new(repositories.session.clone(), repositories.user.clone()),
        };

        log::info!("[state] handlers wired, token ttl {} min", token_ttl.num_minutes());

        Self {
            commands: Arc::new(commands),
            queries: Arc::new(queries),
            services: Arc::new(services),
        }
    }
}
