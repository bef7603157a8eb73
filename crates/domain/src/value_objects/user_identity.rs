//! Identity of the user behind the current HTTP request
//!
//! `UserIdentity` is what every layer sees when it asks "who is calling?".
//! Requests without identity headers map to [`UserIdentity::anonymous`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a user's display name
const MAX_NAME_LENGTH: usize = 200;

// ============================================================================
// UserName
// ============================================================================

/// A validated user display name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Create a new validated user name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("User name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "User name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> String {
        name.0
    }
}

// ============================================================================
// UserIdentity
// ============================================================================

/// The user on whose behalf a request runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    user_id: Option<String>,
    name: Option<UserName>,
    email: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
}

impl UserIdentity {
    /// Identity of a caller that presented no credentials.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Identity of a caller known by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `user_id` is blank.
    pub fn authenticated(
        user_id: impl Into<String>,
        name: Option<UserName>,
    ) -> Result<Self, DomainError> {
        let user_id = user_id.into();
        let trimmed = user_id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("User id cannot be empty"));
        }
        Ok(Self {
            user_id: Some(trimmed.to_string()),
            name,
            email: None,
            roles: Vec::new(),
        })
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        let trimmed = email.trim();
        self.email = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Replace the role list. Blank entries are dropped, duplicates collapse
    /// to their first occurrence.
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for role in roles {
            let role = role.into();
            let role = role.trim();
            if !role.is_empty() && !collected.iter().any(|r| r == role) {
                collected.push(role.to_string());
            }
        }
        self.roles = collected;
        self
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Exact, case-sensitive role check.
    pub fn is_in_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.user_id, &self.name) {
            (Some(_), Some(name)) => write!(f, "{}", name),
            (Some(id), None) => write!(f, "{}", id),
            (None, _) => write!(f, "anonymous"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_name_is_trimmed() {
        let name = UserName::new("  Ada Lovelace  ").unwrap();
        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[test]
    fn user_name_rejects_blank() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn user_name_rejects_too_long() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(UserName::new(long).is_err());

        let exact = "x".repeat(MAX_NAME_LENGTH);
        assert!(UserName::new(exact).is_ok());
    }

    #[test]
    fn user_name_deserialization_validates() {
        let ok: Result<UserName, _> = serde_json::from_str("\"Grace\"");
        assert!(ok.is_ok());

        let bad: Result<UserName, _> = serde_json::from_str("\"  \"");
        assert!(bad.is_err());
    }

    #[test]
    fn anonymous_has_nothing() {
        let anon = UserIdentity::anonymous();
        assert!(!anon.is_authenticated());
        assert_eq!(anon.user_id(), None);
        assert_eq!(anon.name(), None);
        assert_eq!(anon.email(), None);
        assert!(anon.roles().is_empty());
        assert_eq!(anon.to_string(), "anonymous");
    }

    #[test]
    fn authenticated_requires_user_id() {
        assert!(UserIdentity::authenticated("", None).is_err());
        assert!(UserIdentity::authenticated("  ", None).is_err());

        let user = UserIdentity::authenticated(" u-1 ", None).unwrap();
        assert!(user.is_authenticated());
        assert_eq!(user.user_id(), Some("u-1"));
        assert_eq!(user.to_string(), "u-1");
    }

    #[test]
    fn display_prefers_name() {
        let user =
            UserIdentity::authenticated("u-1", Some(UserName::new("Ada").unwrap())).unwrap();
        assert_eq!(user.to_string(), "Ada");
    }

    #[test]
    fn roles_are_trimmed_and_deduplicated() {
        let user = UserIdentity::authenticated("u-1", None)
            .unwrap()
            .with_roles(["admin", " editor ", "", "admin"]);
        assert_eq!(user.roles(), &["admin".to_string(), "editor".to_string()]);
        assert!(user.is_in_role("admin"));
        assert!(user.is_in_role("editor"));
        assert!(!user.is_in_role("Admin"));
    }

    #[test]
    fn blank_email_is_ignored() {
        let user = UserIdentity::authenticated("u-1", None)
            .unwrap()
            .with_email("   ");
        assert_eq!(user.email(), None);

        let user = user.with_email("ada@example.com");
        assert_eq!(user.email(), Some("ada@example.com"));
    }
}
