use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use wellbeing_domain::session::{Session, SessionRepository};
use wellbeing_domain::shared::{DomainError, SessionId};

#[derive(FromRow)]
struct SessionRow {
    id: String,
    username: String,
    token_hash: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session::restore(
            SessionId::from_string(&self.id),
            self.username,
            self.token_hash,
            self.expires_at,
            self.created_at,
        )
    }
}

use crate::persistence::SqliteRepositoryBase;

pub struct SqliteSessionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO sessions (id, username, token_hash, expires_at, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                expires_at = ?4
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(session.id().as_str())
                    .bind(session.username())
                    .bind(session.token_hash())
                    .bind(session.expires_at())
                    .bind(session.created_at()),
                "Save session",
            )
            .await?;

        Ok(())
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError> {
        let query = "SELECT id, username, token_hash, expires_at, created_at \
                     FROM sessions WHERE token_hash = ?1";

        let row: Option<SessionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(token_hash),
                "Find session by token",
            )
            .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let query = "DELETE FROM sessions WHERE expires_at <= ?1";

        let result = self
            .base
            .execute(sqlx::query(query).bind(now), "Delete expired sessions")
            .await?;

        Ok(result.rows_affected())
    }
}
