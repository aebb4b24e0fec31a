use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use wellbeing_domain::shared::{DomainError, UserId};
use wellbeing_domain::user::{User, UserRepository};

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User::restore(
            UserId::from_string(&self.id),
            self.username,
            self.email,
            self.password_hash,
            self.created_at,
        )
    }
}

pub struct SqliteUserRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserRepository {
    const SELECT_QUERY: &'static str =
        "SELECT id, username, email, password_hash, created_at FROM users";

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(user.id().as_str())
                    .bind(user.username())
                    .bind(user.email())
                    .bind(user.password_hash())
                    .bind(user.created_at()),
                "Save user",
            )
            .await?;

        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE username = ?1", Self::SELECT_QUERY);

        let row: Option<UserRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(username),
                "Find user by username",
            )
            .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE email = ?1", Self::SELECT_QUERY);

        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(email), "Find user by email")
            .await?;

        Ok(row.map(|r| r.into_user()))
    }
}
