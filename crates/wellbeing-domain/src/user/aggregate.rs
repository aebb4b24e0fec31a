use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

const MAX_USERNAME_LEN: usize = 64;

/// Registered account owning a set of checklists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<Self, DomainError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(DomainError::Validation(
                "Username cannot be empty".to_string(),
            ));
        }
        if username.len() > MAX_USERNAME_LEN {
            return Err(DomainError::Validation(format!(
                "Username cannot exceed {} characters",
                MAX_USERNAME_LEN
            )));
        }

        let email = email.trim().to_string();
        if !is_plausible_email(&email) {
            return Err(DomainError::Validation(format!(
                "Invalid email address: {}",
                email
            )));
        }

        if password_hash.is_empty() {
            return Err(DomainError::Validation(
                "Password hash cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        })
    }

    pub fn restore(
        id: UserId,
        username: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// local@domain with a dot somewhere in the domain part
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
