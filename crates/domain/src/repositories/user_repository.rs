use crate::entities::{NewUser, UserRecord};
use crate::errors::DomainError;
use async_trait::async_trait;

/// Repository trait - defines what we need from the user store
/// This is a PORT in hexagonal architecture
///
/// Lookups are exact, case-sensitive string comparisons and walk the store in
/// insertion order.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError>;
    async fn find_by_phone(&self, phone: &str) -> Result<Option<UserRecord>, DomainError>;
    /// First record whose email or phone equals `identifier`.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UserRecord>, DomainError>;
    /// Appends the user, assigning `id = count + 1`.
    async fn insert(&self, user: NewUser) -> Result<UserRecord, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
    async fn find_all(&self) -> Result<Vec<UserRecord>, DomainError>;
}
