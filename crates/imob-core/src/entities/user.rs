//! User entity - an account with role-based access

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, UserRole};

/// User account entity
///
/// Credential material (password hash, pending reset code) lives in the
/// storage layer and never travels on the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub roles: Vec<UserRole>,
    pub cpf: String,
    pub phone: String,
    pub cargo: String,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active User with the default USER role
    pub fn new(
        id: Snowflake,
        name: String,
        email: String,
        cpf: String,
        phone: String,
        cargo: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            roles: vec![UserRole::User],
            cpf,
            phone,
            cargo,
            is_disabled: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the role set; an empty set keeps the default
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<UserRole>) -> Self {
        if !roles.is_empty() {
            self.roles = roles;
        }
        self
    }

    /// Check whether the user holds a given role
    #[inline]
    pub fn has_role(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    /// Check whether the user is an administrator
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }

    /// Flip the lifecycle flag
    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            Snowflake::new(1),
            "Maria Silva".to_string(),
            "maria@example.com".to_string(),
            "123.456.789-00".to_string(),
            "31999990000".to_string(),
            "Corretora".to_string(),
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert_eq!(user.roles, vec![UserRole::User]);
        assert!(!user.is_disabled);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_with_roles() {
        let user = sample_user().with_roles(vec![UserRole::Admin, UserRole::Moderator]);
        assert!(user.is_admin());
        assert!(user.has_role(UserRole::Moderator));
        assert!(!user.has_role(UserRole::User));
    }

    #[test]
    fn test_with_roles_empty_keeps_default() {
        let user = sample_user().with_roles(vec![]);
        assert_eq!(user.roles, vec![UserRole::User]);
    }

    #[test]
    fn test_set_disabled() {
        let mut user = sample_user();
        user.set_disabled(true);
        assert!(user.is_disabled);
        user.set_disabled(true);
        assert!(user.is_disabled);
    }
}
