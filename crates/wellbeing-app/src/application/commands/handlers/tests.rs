use chrono::Duration;
use std::sync::Arc;

use crate::application::commands::*;
use crate::application::commands::handlers::*;
use crate::application::services::AuthService;
use crate::application::testing::{
    MockChecklistRepository, MockSessionRepository, MockUserRepository,
};
use wellbeing_domain::checklist::{parse_date, ActivityFlags, ChecklistRepository};
use wellbeing_domain::session::SessionRepository;
use wellbeing_domain::shared::{DomainError, ErrorCode};
use wellbeing_domain::user::UserRepository;
use wellbeing_infrastructure::security::PasswordHasher;

fn register_command(username: &str, email: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        username: username.to_string(),
        email: email.to_string(),
        password: "s3cret-pass".to_string(),
    }
}

struct AuthFixture {
    users: Arc<MockUserRepository>,
    sessions: Arc<MockSessionRepository>,
    register: RegisterUserCommandHandler,
    login: LoginCommandHandler,
    auth: AuthService,
}

fn auth_fixture(ttl: Duration) -> AuthFixture {
    let users = Arc::new(MockUserRepository::new());
    let sessions = Arc::new(MockSessionRepository::new());
    let hasher = Arc::new(PasswordHasher::new());

    AuthFixture {
        register: RegisterUserCommandHandler::new(users.clone(), hasher.clone()),
        login: LoginCommandHandler::new(users.clone(), sessions.clone(), hasher, ttl),
        auth: AuthService::new(sessions.clone(), users.clone()),
        users,
        sessions,
    }
}

// Register

#[tokio::test]
async fn test_register_user_command_handler() {
    let fx = auth_fixture(Duration::minutes(30));

    let result = fx
        .register
        .handle(register_command("alice", "alice@example.com"))
        .await
        .expect("register");
    assert!(!result.user_id.is_empty());

    let saved = fx
        .users
        .find_by_username("alice")
        .await
        .unwrap()
        .expect("user saved");
    assert_eq!(saved.email(), "alice@example.com");
    // Stored hash, never the plaintext
    assert_ne!(saved.password_hash(), "s3cret-pass");
    assert!(saved.password_hash().starts_with("$argon2"));
}

#[tokio::test]
async fn test_register_duplicate_username_rejected() {
    let fx = auth_fixture(Duration::minutes(30));
    fx.register
        .handle(register_command("alice", "alice@example.com"))
        .await
        .unwrap();

    let err = fx
        .register
        .handle(register_command("alice", "other@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::AlreadyRegistered(_)));
    assert_eq!(err.message(), "Username already registered");
    assert_eq!(fx.users.count().await, 1);
}

#[tokio::test]
async fn test_register_duplicate_email_rejected() {
    let fx = auth_fixture(Duration::minutes(30));
    fx.register
        .handle(register_command("alice", "alice@example.com"))
        .await
        .unwrap();

    let err = fx
        .register
        .handle(register_command("bob", "alice@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::AlreadyRegistered);
    assert_eq!(err.message(), "Email already registered");
}

#[tokio::test]
async fn test_register_rejects_empty_password_and_bad_email() {
    let fx = auth_fixture(Duration::minutes(30));

    let mut cmd = register_command("alice", "alice@example.com");
    cmd.password = String::new();
    let err = fx.register.handle(cmd).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let err = fx
        .register
        .handle(register_command("alice", "not-an-email"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(fx.users.count().await, 0);
}

// Login + authentication

#[tokio::test]
async fn test_login_issues_token_that_authenticates() {
    let fx = auth_fixture(Duration::minutes(30));
    fx.register
        .handle(register_command("alice", "alice@example.com"))
        .await
        .unwrap();

    let login = fx
        .login
        .handle(LoginCommand {
            username: "alice".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await
        .expect("login");

    assert!(!login.access_token.is_empty());

    // Only the digest is persisted
    let stored = fx.sessions.all().await;
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0].token_hash(), login.access_token);

    let username = fx.auth.authenticate(&login.access_token).await.unwrap();
    assert_eq!(username, "alice");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let fx = auth_fixture(Duration::minutes(30));
    fx.register
        .handle(register_command("alice", "alice@example.com"))
        .await
        .unwrap();

    let wrong_password = fx
        .login
        .handle(LoginCommand {
            username: "alice".to_string(),
            password: "nope".to_string(),
        })
        .await
        .unwrap_err();
    let unknown_user = fx
        .login
        .handle(LoginCommand {
            username: "mallory".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await
        .unwrap_err();

    for err in [wrong_password, unknown_user] {
        assert!(matches!(err, DomainError::InvalidCredentials(_)));
        assert_eq!(err.message(), "Incorrect username or password");
    }
    assert!(fx.sessions.all().await.is_empty());
}

#[tokio::test]
async fn test_expired_token_is_rejected_and_purged() {
    let fx = auth_fixture(Duration::seconds(-1));
    fx.register
        .handle(register_command("alice", "alice@example.com"))
        .await
        .unwrap();

    let login = fx
        .login
        .handle(LoginCommand {
            username: "alice".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await
        .unwrap();

    let err = fx.auth.authenticate(&login.access_token).await.unwrap_err();
    assert!(matches!(err, DomainError::SessionExpired(_)));
    assert_eq!(err.message(), "Could not validate credentials");

    assert_eq!(fx.auth.purge_expired_sessions().await.unwrap(), 1);
    assert!(fx.sessions.all().await.is_empty());
}

#[tokio::test]
async fn test_unknown_token_and_deleted_owner_rejected() {
    let fx = auth_fixture(Duration::minutes(30));
    assert!(fx.auth.authenticate("made-up-token").await.is_err());
    assert!(fx.auth.authenticate("").await.is_err());

    fx.register
        .handle(register_command("alice", "alice@example.com"))
        .await
        .unwrap();
    let login = fx
        .login
        .handle(LoginCommand {
            username: "alice".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await
        .unwrap();

    fx.users.remove("alice").await;
    let err = fx.auth.authenticate(&login.access_token).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidCredentials(_)));
    // Session itself is still there
    assert_eq!(fx.sessions.delete_expired(chrono::Utc::now()).await.unwrap(), 0);
}

// Save checklist

fn save_command(date: &str, flags: ActivityFlags) -> SaveChecklistCommand {
    SaveChecklistCommand {
        username: "alice".to_string(),
        date: Some(date.to_string()),
        flags,
        cigarettes: 2,
        steps: Some(8000),
    }
}

#[tokio::test]
async fn test_save_checklist_upserts() {
    let repo = Arc::new(MockChecklistRepository::new());
    let handler = SaveChecklistCommandHandler::new(repo.clone());

    let first = handler
        .handle(save_command(
            "2024-01-09",
            ActivityFlags {
                pushups: true,
                oiling: true,
                ..ActivityFlags::default()
            },
        ))
        .await
        .expect("save tuesday");
    assert_eq!(first.date, "2024-01-09");

    handler
        .handle(save_command(
            "2024-01-09",
            ActivityFlags {
                situps: true,
                ..ActivityFlags::default()
            },
        ))
        .await
        .expect("overwrite tuesday");

    let stored = repo
        .find_by_date("alice", parse_date("2024-01-09").unwrap())
        .await
        .unwrap()
        .expect("entry stored");
    assert!(!stored.flags().pushups);
    assert!(!stored.flags().oiling);
    assert!(stored.flags().situps);
    assert_eq!(repo.list_for_user("alice").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_checklist_rejects_ineligible_grooming() {
    let repo = Arc::new(MockChecklistRepository::new());
    let handler = SaveChecklistCommandHandler::new(repo.clone());

    // 2024-01-08 is a Monday
    let err = handler
        .handle(save_command(
            "2024-01-08",
            ActivityFlags {
                oiling: true,
                ..ActivityFlags::default()
            },
        ))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::IneligibleActivity);
    assert!(err
        .message()
        .contains("Oiling is only allowed on Tuesdays and Saturdays"));

    // 2024-01-09 is a Tuesday
    let err = handler
        .handle(save_command(
            "2024-01-09",
            ActivityFlags {
                facemask: true,
                ..ActivityFlags::default()
            },
        ))
        .await
        .unwrap_err();
    assert!(err
        .message()
        .contains("Facemask is only allowed on Wednesdays and Saturdays"));

    assert!(repo.list_for_user("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_checklist_rejects_bad_date() {
    let handler = SaveChecklistCommandHandler::new(Arc::new(MockChecklistRepository::new()));
    let err = handler
        .handle(save_command("2024-02-30", ActivityFlags::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidDate(_)));
}

#[tokio::test]
async fn test_save_checklist_defaults_to_today() {
    let repo = Arc::new(MockChecklistRepository::new());
    let handler = SaveChecklistCommandHandler::new(repo.clone());

    let mut cmd = save_command("ignored", ActivityFlags::default());
    cmd.date = None;
    cmd.flags.pushups = true;

    let result = handler.handle(cmd).await.unwrap();
    let today = chrono::Local::now().date_naive();
    // Midnight rollover between the two clock reads is tolerated
    let accepted = [today, today.pred_opt().unwrap()];
    assert!(accepted.contains(&parse_date(&result.date).unwrap()));
}
