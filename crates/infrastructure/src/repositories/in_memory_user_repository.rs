use crate::seed::seed_users;
use async_trait::async_trait;
use domain::{DomainError, NewUser, UserRecord, UserRepository};
use tokio::sync::RwLock;
use tracing::debug;

/// Process-lifetime user store. Append-only; nothing survives a restart.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Store pre-loaded with the fixture accounts (ids "1" and "2").
    pub fn seeded() -> Self {
        let users = seed_users()
            .into_iter()
            .enumerate()
            .map(|(index, user)| UserRecord::from_new((index + 1).to_string(), user))
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }

    async fn find_first<F>(&self, predicate: F) -> Option<UserRecord>
    where
        F: Fn(&UserRecord) -> bool,
    {
        let users = self.users.read().await;
        users.iter().find(|user| predicate(*user)).cloned()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        Ok(self
            .find_first(|user| user.email.as_deref() == Some(email))
            .await)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<UserRecord>, DomainError> {
        Ok(self.find_first(|user| user.phone == phone).await)
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UserRecord>, DomainError> {
        Ok(self
            .find_first(|user| user.matches_identifier(identifier))
            .await)
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, DomainError> {
        let mut users = self.users.write().await;
        let record = UserRecord::from_new((users.len() + 1).to_string(), user);
        users.push(record.clone());
        debug!("Stored user {} ({} total)", record.id, users.len());
        Ok(record)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.len())
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, DomainError> {
        Ok(self.users.read().await.clone())
    }
}
