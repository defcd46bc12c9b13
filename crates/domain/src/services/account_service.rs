use crate::entities::{NewUser, SessionInfo, UserSummary};
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Account Service - registration and login rules over a [`UserRepository`]
pub struct AccountService {
    user_repository: Arc<dyn UserRepository>,
    // Held across the uniqueness scan and the append.
    registration_lock: Mutex<()>,
}

impl AccountService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_repository,
            registration_lock: Mutex::new(()),
        }
    }

    /// Register a new user.
    ///
    /// Email is checked before phone and the first conflict wins. The new
    /// record gets the next sequential id.
    pub async fn register(&self, new_user: NewUser) -> Result<UserSummary, DomainError> {
        let new_user = new_user.validate()?;

        let _guard = self.registration_lock.lock().await;

        if let Some(email) = new_user.email_for_uniqueness() {
            if self.user_repository.find_by_email(email).await?.is_some() {
                warn!("Registration rejected, email already registered: {}", email);
                return Err(DomainError::DuplicateEmail(email.to_string()));
            }
        }

        if self.user_repository.find_by_phone(&new_user.phone).await?.is_some() {
            warn!("Registration rejected, phone already registered: {}", new_user.phone);
            return Err(DomainError::DuplicatePhone(new_user.phone));
        }

        let user = self.user_repository.insert(new_user).await?;
        info!("User registered: {} ({})", user.name, user.id);

        Ok(user.summary())
    }

    /// Log in with an email or phone number.
    ///
    /// An unknown identifier and a wrong password fail the same way.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<SessionInfo, DomainError> {
        match self.user_repository.find_by_identifier(identifier).await? {
            Some(user) if user.password_matches(password) => {
                info!("User logged in: {} ({})", user.name, user.id);
                Ok(user.session())
            }
            _ => {
                warn!("Login failed for identifier: {}", identifier);
                Err(DomainError::InvalidCredentials)
            }
        }
    }

    pub async fn user_count(&self) -> Result<usize, DomainError> {
        self.user_repository.count().await
    }

    /// All users in store order, without passwords.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, DomainError> {
        let users = self.user_repository.find_all().await?;
        Ok(users.iter().map(|user| user.summary()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::UserRecord;
    use async_trait::async_trait;

    /// Store whose every call fails, for checking error propagation.
    struct BrokenRepository;

    #[async_trait]
    impl UserRepository for BrokenRepository {
        async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, DomainError> {
            Err(DomainError::Repository("store offline".to_string()))
        }
        async fn find_by_phone(&self, _phone: &str) -> Result<Option<UserRecord>, DomainError> {
            Err(DomainError::Repository("store offline".to_string()))
        }
        async fn find_by_identifier(&self, _identifier: &str) -> Result<Option<UserRecord>, DomainError> {
            Err(DomainError::Repository("store offline".to_string()))
        }
        async fn insert(&self, _user: NewUser) -> Result<UserRecord, DomainError> {
            Err(DomainError::Repository("store offline".to_string()))
        }
        async fn count(&self) -> Result<usize, DomainError> {
            Err(DomainError::Repository("store offline".to_string()))
        }
        async fn find_all(&self) -> Result<Vec<UserRecord>, DomainError> {
            Err(DomainError::Repository("store offline".to_string()))
        }
    }

    fn service() -> AccountService {
        AccountService::new(Arc::new(BrokenRepository))
    }

    #[tokio::test]
    async fn register_propagates_repository_errors() {
        let err = service()
            .register(NewUser::new("A", None, "pw", "111"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Repository("store offline".to_string()));
    }

    #[tokio::test]
    async fn register_validates_before_touching_store() {
        let err = service()
            .register(NewUser::new("", None, "pw", "111"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn login_propagates_repository_errors() {
        let err = service().login("a@x.com", "pw").await.unwrap_err();
        assert_eq!(err, DomainError::Repository("store offline".to_string()));
    }
}
