use domain::*;
use infrastructure::*;
use std::sync::Arc;

/// Account Application - owns the user store and the service built on it
pub struct AccountApp {
    pub account_service: AccountService,
}

impl AccountApp {
    /// Seeded in-memory store; build this once per process.
    pub fn new() -> Self {
        let user_repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::seeded());
        Self::with_repository(user_repository)
    }

    pub fn with_repository(user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            account_service: AccountService::new(user_repository),
        }
    }

    pub async fn register(&self, new_user: NewUser) -> Result<UserSummary, DomainError> {
        self.account_service.register(new_user).await
    }

    pub async fn login(&self, identifier: &str, password: &str) -> Result<SessionInfo, DomainError> {
        self.account_service.login(identifier, password).await
    }
}

impl Default for AccountApp {
    fn default() -> Self {
        Self::new()
    }
}
