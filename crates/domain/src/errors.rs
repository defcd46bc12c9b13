use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Phone already registered: {0}")]
    DuplicatePhone(String),

    /// Covers both "no such user" and "wrong password".
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Repository error: {0}")]
    Repository(String),
}
