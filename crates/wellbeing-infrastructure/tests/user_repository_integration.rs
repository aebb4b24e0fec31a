use std::sync::Arc;

use wellbeing_domain::shared::DomainError;
use wellbeing_domain::user::{User, UserRepository};
use wellbeing_infrastructure::persistence::repositories::SqliteUserRepository;


#[tokio::test]
async fn user_repo_save_and_find_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool));

    let user = User::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "hash".to_string(),
    )
    .expect("create user");
    repo.save(&user).await.expect("save user");

    let by_name = repo
        .find_by_username("alice")
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(by_name.id(), user.id());
    assert_eq!(by_name.email(), "alice@example.com");
    assert_eq!(by_name.password_hash(), "hash");

    let by_email = repo
        .find_by_email("alice@example.com")
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(by_email.username(), "alice");

    assert!(repo.find_by_username("bob").await.expect("find").is_none());
    assert!(repo
        .find_by_email("bob@example.com")
        .await
        .expect("find")
        .is_none());
}

#[tokio::test]
async fn user_repo_duplicate_username_is_conflict() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool));

    let first = User::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "hash".to_string(),
    )
    .unwrap();
    repo.save(&first).await.expect("save first");

    let same_name = User::new(
        "alice".to_string(),
        "other@example.com".to_string(),
        "hash".to_string(),
    )
    .unwrap();
    let result = repo.save(&same_name).await;
    assert!(matches!(result, Err(DomainError::Conflict(_))));

    let same_email = User::new(
        "carol".to_string(),
        "alice@example.com".to_string(),
        "hash".to_string(),
    )
    .unwrap();
    let result = repo.save(&same_email).await;
    assert!(matches!(result, Err(DomainError::Conflict(_))));
}
