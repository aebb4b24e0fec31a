use sqlx::{
    query::{Query, QueryAs},
    sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow},
    FromRow, Sqlite, SqlitePool,
};
use std::sync::Arc;
use wellbeing_domain::shared::DomainError;

/// Shared plumbing for the SQLite repositories.
///
/// Every call carries an operation name so failures read like
/// "Save checklist: database is locked".
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        operation: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, operation))
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        operation: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, operation))
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        operation: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, operation))
    }
}

/// Unique and foreign key violations become `Conflict`, everything else
/// `Repository`.
pub fn map_sqlx_error(err: sqlx::Error, operation: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
            return DomainError::Conflict(format!("{}: {}", operation, db_err.message()));
        }
    }

    match err {
        sqlx::Error::RowNotFound => DomainError::NotFound(operation.to_string()),
        other => DomainError::Repository(format!("{}: {}", operation, other)),
    }
}
