//! User roles and the authorization predicate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role labels carried by user accounts and token claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    User,
    Moderator,
}

impl UserRole {
    /// Wire label for this role
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Moderator => "MODERATOR",
        }
    }

    /// All known roles
    pub const ALL: [UserRole; 3] = [Self::Admin, Self::User, Self::Moderator];
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a role label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl std::str::FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            "MODERATOR" => Ok(Self::Moderator),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Role gate predicate
///
/// Passes when `required` is empty (no restriction) or when the caller holds
/// at least one of the required roles.
#[must_use]
pub fn authorize(required: &[UserRole], caller: &[UserRole]) -> bool {
    required.is_empty() || caller.iter().any(|role| required.contains(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("moderator".parse::<UserRole>().unwrap(), UserRole::Moderator);
        assert_eq!(" user ".parse::<UserRole>().unwrap(), UserRole::User);
        assert!("OWNER".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(UserRole::Admin.as_str(), "ADMIN");
        assert_eq!(UserRole::Moderator.to_string(), "MODERATOR");
    }

    #[test]
    fn test_role_json_labels() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");

        let role: UserRole = serde_json::from_str("\"MODERATOR\"").unwrap();
        assert_eq!(role, UserRole::Moderator);
    }

    #[test]
    fn test_authorize_no_restriction() {
        assert!(authorize(&[], &[UserRole::User]));
        assert!(authorize(&[], &[]));
    }

    #[test]
    fn test_authorize_intersection() {
        assert!(authorize(&[UserRole::Admin], &[UserRole::User, UserRole::Admin]));
        assert!(authorize(
            &[UserRole::Admin, UserRole::Moderator],
            &[UserRole::Moderator]
        ));
    }

    #[test]
    fn test_authorize_denied() {
        assert!(!authorize(&[UserRole::Admin], &[UserRole::User]));
        assert!(!authorize(&[UserRole::Admin], &[]));
    }
}
