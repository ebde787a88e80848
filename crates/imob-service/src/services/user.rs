//! User service
//!
//! Handles user CRUD, password maintenance, the reset-code flow, lifecycle
//! toggling, and the bulk sheet import/export for the user family.

use chrono::Utc;
use imob_common::auth::{
    generate_reset_code, hash_password, is_password_hashed, reset_code_expiry,
};
use imob_core::entities::User;
use imob_core::{Snowflake, UserRole};
use tracing::{info, instrument, warn};

use crate::dto::{
    CreateUserRequest, ForgotPasswordRequest, ResetPasswordRequest, UpdatePasswordRequest,
    UpdateUserRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::sheet::{self, ImportSummary};

/// Password assigned to accounts minted by bulk import; expected to be
/// changed on first login.
const DEFAULT_IMPORT_PASSWORD: &str = "123456";

/// Sheet columns for the user family
const SHEET_COLUMNS: [&str; 6] = ["name", "email", "phone", "cpf", "cargo", "status"];

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new user account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(
            self.ctx.generate_id(),
            request.name,
            request.email,
            request.cpf,
            request.phone,
            request.cargo,
        )
        .with_roles(request.roles.unwrap_or_default());

        self.ctx.user_repo().create(&user, &password_hash).await?;
        info!(user_id = %user.id, "User created");

        Ok(UserResponse::from(&user))
    }

    /// List users; the default listing excludes disabled accounts
    #[instrument(skip(self))]
    pub async fn list(&self, include_disabled: bool) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list(include_disabled).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// List active users holding a role
    #[instrument(skip(self))]
    pub async fn list_by_role(&self, role: UserRole) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list_by_role(role).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get one user; disabled accounts are hidden from single lookups
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .filter(|user| !user.is_disabled)
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Update profile fields; a password in the payload is re-hashed
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(roles) = request.roles {
            if !roles.is_empty() {
                user.roles = roles;
            }
        }
        if let Some(cpf) = request.cpf {
            user.cpf = cpf;
        }
        if let Some(phone) = request.phone {
            user.phone = phone;
        }
        if let Some(cargo) = request.cargo {
            user.cargo = cargo;
        }
        user.updated_at = Utc::now();

        self.ctx.user_repo().update(&user).await?;

        if let Some(password) = request.password {
            let password_hash =
                hash_password(&password).map_err(|e| ServiceError::internal(e.to_string()))?;
            self.ctx
                .user_repo()
                .update_password(user.id, &password_hash)
                .await?;
        }

        info!(user_id = %user_id, "User updated");
        Ok(UserResponse::from(&user))
    }

    /// Change password after verifying the current one
    #[instrument(skip(self, request))]
    pub async fn update_password(
        &self,
        user_id: Snowflake,
        request: UpdatePasswordRequest,
    ) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let is_valid = imob_common::auth::verify_password(&request.current_password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !is_valid {
            warn!(user_id = %user_id, "Password change rejected: wrong current password");
            return Err(ServiceError::App(imob_common::AppError::InvalidCredentials));
        }

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        self.ctx
            .user_repo()
            .update_password(user_id, &new_hash)
            .await?;

        info!(user_id = %user_id, "Password changed");
        Ok(UserResponse::from(&user))
    }

    /// Hard-delete a user account
    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User removed");
        Ok(())
    }

    /// Start the reset flow; always succeeds so callers cannot probe for
    /// registered emails
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn forgot_password(&self, request: ForgotPasswordRequest) -> ServiceResult<()> {
        let Some(user) = self.ctx.user_repo().find_by_email(&request.email).await? else {
            info!("Reset requested for unknown email; answering success");
            return Ok(());
        };

        let code = generate_reset_code();
        self.ctx
            .user_repo()
            .set_reset_code(user.id, &code, reset_code_expiry())
            .await?;

        self.ctx
            .mailer()
            .send_password_reset_code(&user.email, &code)
            .await
            .map_err(|e| {
                ServiceError::App(imob_common::AppError::ExternalService(e.to_string()))
            })?;

        info!(user_id = %user.id, "Reset code issued");
        Ok(())
    }

    /// Finish the reset flow; the code is single-use and expires after 1 hour
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_for_reset(&request.email, &request.code, Utc::now())
            .await?
            .ok_or_else(|| ServiceError::bad_request("Invalid or expired reset code"))?;

        let password_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        self.ctx
            .user_repo()
            .update_password(user.id, &password_hash)
            .await?;
        self.ctx.user_repo().clear_reset_code(user.id).await?;

        info!(user_id = %user.id, "Password reset via code");
        Ok(UserResponse::from(&user))
    }

    /// Re-enable an account (idempotent)
    #[instrument(skip(self))]
    pub async fn activate(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        self.set_disabled(user_id, false).await
    }

    /// Soft-disable an account (idempotent)
    #[instrument(skip(self))]
    pub async fn deactivate(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        self.set_disabled(user_id, true).await
    }

    async fn set_disabled(&self, user_id: Snowflake, disabled: bool) -> ServiceResult<UserResponse> {
        self.ctx.user_repo().set_disabled(user_id, disabled).await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    // ========================================================================
    // Bulk import / export
    // ========================================================================

    /// Reconcile the user collection against an uploaded sheet
    ///
    /// Rows present in the sheet end up active (created or updated); every
    /// other account is left disabled by the pre-pass, except the protected
    /// administrator. Duplicate emails within the sheet resolve to the last
    /// row in input order.
    #[instrument(skip(self, bytes))]
    pub async fn import_sheet(&self, bytes: &[u8]) -> ServiceResult<ImportSummary> {
        let rows = sheet::parse_rows(bytes).map_err(|e| {
            ServiceError::bad_request(format!(
                "Could not process the sheet ({e}). Expected columns: name, email, cpf, phone, cargo, roles"
            ))
        })?;

        let mut summary = ImportSummary::default();

        summary.deactivated = self
            .ctx
            .user_repo()
            .disable_all_except(self.ctx.admin_email())
            .await?;
        info!(
            deactivated = summary.deactivated,
            "Users outside the sheet marked inactive"
        );

        for row in &rows {
            let Some(email) = row.get("email") else {
                summary.record_ignored("(missing email)", "email column empty");
                continue;
            };
            let email = email.to_lowercase();

            let roles = parse_roles(row.get("roles"));

            match self.ctx.user_repo().find_by_email(&email).await? {
                Some(mut user) => {
                    // Existing account: overwrite profile fields, keep password
                    if let Some(name) = row.get("name") {
                        user.name = name.to_string();
                    }
                    if let Some(cpf) = row.get("cpf") {
                        user.cpf = cpf.to_string();
                    }
                    if let Some(phone) = row.get("phone") {
                        user.phone = phone.to_string();
                    }
                    if let Some(cargo) = row.get("cargo") {
                        user.cargo = cargo.to_string();
                    }
                    user.roles = roles;
                    user.is_disabled = false;
                    user.updated_at = Utc::now();

                    self.ctx.user_repo().update(&user).await?;
                    summary.record_updated(email);
                }
                None => {
                    let user = User::new(
                        self.ctx.generate_id(),
                        row.get_owned("name").unwrap_or_default(),
                        email.clone(),
                        row.get_owned("cpf").unwrap_or_default(),
                        row.get_owned("phone").unwrap_or_default(),
                        row.get_owned("cargo").unwrap_or_default(),
                    )
                    .with_roles(roles);

                    let password_hash = hash_password(DEFAULT_IMPORT_PASSWORD)
                        .map_err(|e| ServiceError::internal(e.to_string()))?;
                    self.ctx.user_repo().create(&user, &password_hash).await?;
                    summary.record_created(email);
                }
            }
        }

        summary.finish("users");
        info!(
            created = summary.created,
            updated = summary.updated,
            deactivated = summary.deactivated,
            ignored = summary.ignored,
            "User import finished"
        );
        Ok(summary)
    }

    /// Project every account (disabled included) into a sheet
    #[instrument(skip(self))]
    pub async fn export_sheet(&self) -> ServiceResult<Vec<u8>> {
        let users = self.ctx.user_repo().list(true).await?;

        let rows: Vec<Vec<String>> = users
            .iter()
            .map(|user| {
                vec![
                    user.name.clone(),
                    user.email.clone(),
                    user.phone.clone(),
                    user.cpf.clone(),
                    user.cargo.clone(),
                    sheet::status_label(user.is_disabled).to_string(),
                ]
            })
            .collect();

        sheet::write_sheet(&SHEET_COLUMNS, &rows)
            .map_err(|e| ServiceError::internal(e.to_string()))
    }

    // ========================================================================
    // Startup passes
    // ========================================================================

    /// One-time idempotent migration: re-hash any stored password that does
    /// not carry the argon2 digest format
    #[instrument(skip(self))]
    pub async fn rehash_legacy_passwords(&self) -> ServiceResult<u64> {
        let credentials = self.ctx.user_repo().list_credentials().await?;

        let mut rehashed = 0;
        for (user_id, stored) in credentials {
            if is_password_hashed(&stored) {
                continue;
            }
            let password_hash =
                hash_password(&stored).map_err(|e| ServiceError::internal(e.to_string()))?;
            self.ctx
                .user_repo()
                .update_password(user_id, &password_hash)
                .await?;
            rehashed += 1;
            info!(user_id = %user_id, "Legacy plaintext password re-hashed");
        }

        Ok(rehashed)
    }

    /// Ensure the protected administrator account exists
    #[instrument(skip(self, password))]
    pub async fn ensure_admin(&self, password: &str) -> ServiceResult<()> {
        let admin_email = self.ctx.admin_email().to_string();
        if self.ctx.user_repo().find_by_email(&admin_email).await?.is_some() {
            return Ok(());
        }

        let password_hash =
            hash_password(password).map_err(|e| ServiceError::internal(e.to_string()))?;
        let admin = User::new(
            self.ctx.generate_id(),
            "admin".to_string(),
            admin_email,
            "000.000.000-00".to_string(),
            "00000-0000".to_string(),
            "Administrador".to_string(),
        )
        .with_roles(vec![UserRole::Admin]);

        self.ctx.user_repo().create(&admin, &password_hash).await?;
        info!(email = %self.ctx.admin_email(), "Administrator account created");
        Ok(())
    }
}

/// Parse the comma-separated roles cell; absent or unparseable labels fall
/// back to the default USER role
fn parse_roles(cell: Option<&str>) -> Vec<UserRole> {
    let roles: Vec<UserRole> = cell
        .map(|value| {
            value
                .split(',')
                .filter_map(|label| label.trim().parse().ok())
                .collect()
        })
        .unwrap_or_default();

    if roles.is_empty() {
        vec![UserRole::User]
    } else {
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles_defaults_to_user() {
        assert_eq!(parse_roles(None), vec![UserRole::User]);
        assert_eq!(parse_roles(Some("")), vec![UserRole::User]);
        assert_eq!(parse_roles(Some("WIZARD")), vec![UserRole::User]);
    }

    #[test]
    fn test_parse_roles_splits_and_trims() {
        assert_eq!(
            parse_roles(Some("ADMIN, moderator")),
            vec![UserRole::Admin, UserRole::Moderator]
        );
    }
}
