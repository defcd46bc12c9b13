use serde::Serialize;

/// A stored account. The password is kept in plain text and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl UserRecord {
    pub fn from_new(id: String, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            password: new_user.password,
        }
    }

    /// Exact match against either the email or the phone.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.email.as_deref() == Some(identifier) || self.phone == identifier
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    pub fn session(&self) -> SessionInfo {
        SessionInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Registration input, before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
    pub password: String,
    pub phone: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        password: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email,
            password: password.into(),
            phone: phone.into(),
        }
    }

    /// Rejects empty required fields. Values are otherwise kept verbatim.
    pub fn validate(self) -> Result<Self, crate::DomainError> {
        if self.name.is_empty() {
            return Err(crate::DomainError::Validation("name cannot be empty".to_string()));
        }

        if self.password.is_empty() {
            return Err(crate::DomainError::Validation(
                "password cannot be empty".to_string(),
            ));
        }

        if self.phone.is_empty() {
            return Err(crate::DomainError::Validation("phone cannot be empty".to_string()));
        }

        Ok(self)
    }

    /// The email to check for duplicates; an empty one is never checked.
    pub fn email_for_uniqueness(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// What a successful registration hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
}

/// What a successful login hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    fn record() -> UserRecord {
        UserRecord::from_new(
            "7".to_string(),
            NewUser::new("Sara", Some("sara@example.com".to_string()), "secret", "0555"),
        )
    }

    #[test]
    fn identifier_matches_email_or_phone() {
        let user = record();
        assert!(user.matches_identifier("sara@example.com"));
        assert!(user.matches_identifier("0555"));
        assert!(!user.matches_identifier("SARA@example.com"));
        assert!(!user.matches_identifier("secret"));
    }

    #[test]
    fn identifier_never_matches_missing_email() {
        let user = UserRecord::from_new("1".to_string(), NewUser::new("Ali", None, "pw", "0100"));
        assert!(!user.matches_identifier(""));
        assert!(user.matches_identifier("0100"));
    }

    #[test]
    fn serialized_record_omits_password() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["phone"], "0555");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn validate_rejects_empty_required_fields() {
        let err = NewUser::new("", None, "pw", "1").validate().unwrap_err();
        assert_eq!(err, DomainError::Validation("name cannot be empty".to_string()));

        let err = NewUser::new("A", None, "", "1").validate().unwrap_err();
        assert_eq!(err, DomainError::Validation("password cannot be empty".to_string()));

        let err = NewUser::new("A", None, "pw", "").validate().unwrap_err();
        assert_eq!(err, DomainError::Validation("phone cannot be empty".to_string()));
    }

    #[test]
    fn validate_accepts_whitespace_values_verbatim() {
        let user = NewUser::new(" ", None, " ", " 1 ").validate().unwrap();
        assert_eq!(user.name, " ");
        assert_eq!(user.password, " ");
        assert_eq!(user.phone, " 1 ");
    }

    #[test]
    fn validate_keeps_empty_email() {
        let user = NewUser::new("A", Some(String::new()), "pw", "1").validate().unwrap();
        assert_eq!(user.email.as_deref(), Some(""));
        assert_eq!(user.email_for_uniqueness(), None);
    }
}
