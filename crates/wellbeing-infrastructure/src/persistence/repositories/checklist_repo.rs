use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use wellbeing_domain::checklist::{
    format_date, ActivityFlags, ChecklistEntry, ChecklistRepository, DATE_FORMAT,
};
use wellbeing_domain::shared::DomainError;

#[derive(FromRow)]
struct ChecklistRow {
    username: String,
    date: String,
    pushups: bool,
    situps: bool,
    ab_crunches: bool,
    oiling: bool,
    facemask: bool,
    cigarettes: i64,
    steps: Option<i64>,
    updated_at: DateTime<Utc>,
}

impl ChecklistRow {
    fn try_into_entry(self) -> Result<ChecklistEntry, DomainError> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|e| {
            DomainError::DataIntegrity(format!("Invalid checklist date: {} ({})", self.date, e))
        })?;

        let cigarettes = u32::try_from(self.cigarettes).map_err(|_| {
            DomainError::DataIntegrity(format!("Invalid cigarette count: {}", self.cigarettes))
        })?;

        let steps = self
            .steps
            .map(|s| {
                u32::try_from(s)
                    .map_err(|_| DomainError::DataIntegrity(format!("Invalid step count: {}", s)))
            })
            .transpose()?;

        let flags = ActivityFlags {
            pushups: self.pushups,
            situps: self.situps,
            ab_crunches: self.ab_crunches,
            oiling: self.oiling,
            facemask: self.facemask,
        };

        Ok(ChecklistEntry::restore(
            self.username,
            date,
            flags,
            cigarettes,
            steps,
            self.updated_at,
        ))
    }
}

pub struct SqliteChecklistRepository {
    base: SqliteRepositoryBase,
}

impl SqliteChecklistRepository {
    const SELECT_QUERY: &'static str = r#"
        SELECT username, date, pushups, situps, ab_crunches, oiling, facemask,
               cigarettes, steps, updated_at
        FROM checklists
    "#;

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl ChecklistRepository for SqliteChecklistRepository {
    async fn save(&self, entry: &ChecklistEntry) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO checklists (
                username, date, pushups, situps, ab_crunches, oiling, facemask,
                cigarettes, steps, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(username, date) DO UPDATE SET
                pushups = ?3,
                situps = ?4,
                ab_crunches = ?5,
                oiling = ?6,
                facemask = ?7,
                cigarettes = ?8,
                steps = ?9,
                updated_at = ?10
        "#;

        let flags = entry.flags();

        self.base
            .execute(
                sqlx::query(query)
                    .bind(entry.username())
                    .bind(format_date(entry.date()))
                    .bind(flags.pushups)
                    .bind(flags.situps)
                    .bind(flags.ab_crunches)
                    .bind(flags.oiling)
                    .bind(flags.facemask)
                    .bind(i64::from(entry.cigarettes()))
                    .bind(entry.steps().map(i64::from))
                    .bind(entry.updated_at()),
                "Save checklist",
            )
            .await?;

        Ok(())
    }

    async fn find_by_date(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> Result<Option<ChecklistEntry>, DomainError> {
        let query = format!("{} WHERE username = ?1 AND date = ?2", Self::SELECT_QUERY);

        let row: Option<ChecklistRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query)
                    .bind(username)
                    .bind(format_date(date)),
                "Find checklist by date",
            )
            .await?;

        row.map(|r| r.try_into_entry()).transpose()
    }

    async fn list_for_user(&self, username: &str) -> Result<Vec<ChecklistEntry>, DomainError> {
        let query = format!("{} WHERE username = ?1 ORDER BY date DESC", Self::SELECT_QUERY);

        let rows: Vec<ChecklistRow> = self
            .base
            .fetch_all(sqlx::query_as(&query).bind(username), "List checklists")
            .await?;

        rows.into_iter().map(|r| r.try_into_entry()).collect()
    }
}
