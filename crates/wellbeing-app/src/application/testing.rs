// In-memory repositories for handler and query tests

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use wellbeing_domain::checklist::{ChecklistEntry, ChecklistRepository};
use wellbeing_domain::session::{Session, SessionRepository};
use wellbeing_domain::shared::DomainError;
use wellbeing_domain::user::{User, UserRepository};

pub struct MockUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn remove(&self, username: &str) {
        self.users.write().await.remove(username);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username())
            || users.values().any(|u| u.email() == user.email())
        {
            return Err(DomainError::Conflict("users".to_string()));
        }
        users.insert(user.username().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }
}

pub struct MockSessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn all(&self) -> Vec<Session> {
        self.sessions.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(session.token_hash().to_string(), session.clone());
        Ok(())
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.read().await.get(token_hash).cloned())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.is_valid_at(now));
        Ok((before - sessions.len()) as u64)
    }
}

pub struct MockChecklistRepository {
    entries: RwLock<HashMap<(String, NaiveDate), ChecklistEntry>>,
}

impl MockChecklistRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ChecklistRepository for MockChecklistRepository {
    async fn save(&self, entry: &ChecklistEntry) -> Result<(), DomainError> {
        self.entries.write().await.insert(
            (entry.username().to_string(), entry.date()),
            entry.clone(),
        );
        Ok(())
    }

    async fn find_by_date(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> Result<Option<ChecklistEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .get(&(username.to_string(), date))
            .cloned())
    }

    async fn list_for_user(&self, username: &str) -> Result<Vec<ChecklistEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .values()
            .filter(|e| e.username() == username)
            .cloned()
            .collect())
    }
}
