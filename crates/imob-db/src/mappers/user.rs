//! User entity <-> model mapper

use imob_core::entities::User;
use imob_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// Unknown role labels found in storage are dropped rather than failing the
/// whole row.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            roles: model
                .roles
                .iter()
                .filter_map(|label| label.parse().ok())
                .collect(),
            cpf: model.cpf,
            phone: model.phone,
            cargo: model.cargo,
            is_disabled: model.is_disabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Role labels as stored in the roles column
pub fn role_labels(user: &User) -> Vec<String> {
    user.roles.iter().map(|role| role.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use imob_core::UserRole;

    #[test]
    fn test_unknown_role_labels_dropped() {
        let model = UserModel {
            id: 1,
            name: "x".to_string(),
            email: "x@y.com".to_string(),
            password_hash: "$argon2...".to_string(),
            roles: vec!["ADMIN".to_string(), "WIZARD".to_string()],
            cpf: String::new(),
            phone: String::new(),
            cargo: String::new(),
            password_reset_code: None,
            reset_code_expires_at: None,
            is_disabled: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let user = User::from(model);
        assert_eq!(user.roles, vec![UserRole::Admin]);
    }
}
