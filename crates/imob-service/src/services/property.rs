//! Property service
//!
//! Handles property CRUD, lifecycle toggling, and the bulk sheet
//! import/export for the property family.

use chrono::Utc;
use imob_core::entities::Property;
use imob_core::{PropertyKind, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreatePropertyRequest, PropertyResponse, UpdatePropertyRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::sheet::{self, ImportSummary};

/// Sheet columns for the property family
const SHEET_COLUMNS: [&str; 11] = [
    "tipo", "rua", "numero", "complemento", "cep", "cidade", "uf", "obs", "copasa", "cemig",
    "status",
];

/// Property service
pub struct PropertyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PropertyService<'a> {
    /// Create a new PropertyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new property record
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreatePropertyRequest) -> ServiceResult<PropertyResponse> {
        let mut property = Property::new(
            self.ctx.generate_id(),
            request.kind,
            request.street,
            request.number,
        );
        property.complement = request.complement;
        property.postal_code = request.postal_code;
        property.city = request.city;
        property.state = request.state;
        property.notes = request.notes;
        property.water_account = request.water_account;
        property.power_account = request.power_account;
        property.owner_id = request.owner_id;

        self.ctx.property_repo().create(&property).await?;
        info!(property_id = %property.id, "Property created");

        Ok(PropertyResponse::from(&property))
    }

    /// List properties; the default listing excludes disabled records
    #[instrument(skip(self))]
    pub async fn list(&self, include_disabled: bool) -> ServiceResult<Vec<PropertyResponse>> {
        let properties = self.ctx.property_repo().list(include_disabled).await?;
        Ok(properties.iter().map(PropertyResponse::from).collect())
    }

    /// Get one property by id
    #[instrument(skip(self))]
    pub async fn get(&self, property_id: Snowflake) -> ServiceResult<PropertyResponse> {
        let property = self
            .ctx
            .property_repo()
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property", property_id.to_string()))?;

        Ok(PropertyResponse::from(&property))
    }

    /// Update a property record
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        property_id: Snowflake,
        request: UpdatePropertyRequest,
    ) -> ServiceResult<PropertyResponse> {
        let mut property = self
            .ctx
            .property_repo()
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property", property_id.to_string()))?;

        if let Some(kind) = request.kind {
            property.kind = kind;
        }
        if let Some(street) = request.street {
            property.street = street;
        }
        if let Some(number) = request.number {
            property.number = number;
        }
        if let Some(complement) = request.complement {
            property.complement = Some(complement);
        }
        if let Some(postal_code) = request.postal_code {
            property.postal_code = Some(postal_code);
        }
        if let Some(city) = request.city {
            property.city = Some(city);
        }
        if let Some(state) = request.state {
            property.state = Some(state);
        }
        if let Some(notes) = request.notes {
            property.notes = Some(notes);
        }
        if let Some(water_account) = request.water_account {
            property.water_account = Some(water_account);
        }
        if let Some(power_account) = request.power_account {
            property.power_account = Some(power_account);
        }
        if let Some(owner_id) = request.owner_id {
            property.owner_id = Some(owner_id);
        }
        property.updated_at = Utc::now();

        self.ctx.property_repo().update(&property).await?;
        info!(property_id = %property_id, "Property updated");

        Ok(PropertyResponse::from(&property))
    }

    /// Hard-delete a property record
    #[instrument(skip(self))]
    pub async fn remove(&self, property_id: Snowflake) -> ServiceResult<()> {
        self.ctx.property_repo().delete(property_id).await?;
        info!(property_id = %property_id, "Property removed");
        Ok(())
    }

    /// Re-enable a property (idempotent)
    #[instrument(skip(self))]
    pub async fn activate(&self, property_id: Snowflake) -> ServiceResult<PropertyResponse> {
        self.set_disabled(property_id, false).await
    }

    /// Soft-disable a property (idempotent)
    #[instrument(skip(self))]
    pub async fn deactivate(&self, property_id: Snowflake) -> ServiceResult<PropertyResponse> {
        self.set_disabled(property_id, true).await
    }

    async fn set_disabled(
        &self,
        property_id: Snowflake,
        disabled: bool,
    ) -> ServiceResult<PropertyResponse> {
        self.ctx
            .property_repo()
            .set_disabled(property_id, disabled)
            .await?;

        let property = self
            .ctx
            .property_repo()
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property", property_id.to_string()))?;

        Ok(PropertyResponse::from(&property))
    }

    // ========================================================================
    // Bulk import / export
    // ========================================================================

    /// Reconcile the property collection against an uploaded sheet
    ///
    /// The natural key is (tipo, rua, numero); rows missing any key field or
    /// carrying a tipo outside the enumeration are ignored. Duplicate keys
    /// within the sheet resolve to the last row in input order.
    #[instrument(skip(self, bytes))]
    pub async fn import_sheet(&self, bytes: &[u8]) -> ServiceResult<ImportSummary> {
        let rows = sheet::parse_rows(bytes).map_err(|e| {
            ServiceError::bad_request(format!(
                "Could not process the sheet ({e}). Expected columns: tipo, rua, numero, \
                 complemento, cep, cidade, uf, obs, copasa, cemig"
            ))
        })?;

        let mut summary = ImportSummary::default();

        summary.deactivated = self.ctx.property_repo().disable_all().await?;
        info!(
            deactivated = summary.deactivated,
            "Properties outside the sheet marked inactive"
        );

        for row in &rows {
            let (Some(tipo), Some(street), Some(number)) =
                (row.get("tipo"), row.get("rua"), row.get("numero"))
            else {
                summary.record_ignored(row_key(row), "tipo, rua or numero column empty");
                continue;
            };

            let Ok(kind) = tipo.parse::<PropertyKind>() else {
                summary.record_ignored(row_key(row), format!("unknown tipo: {tipo}"));
                continue;
            };

            let key = imob_core::entities::natural_key(kind, street, number);

            match self
                .ctx
                .property_repo()
                .find_by_natural_key(kind, street, number)
                .await?
            {
                Some(mut property) => {
                    apply_row(&mut property, row);
                    property.is_disabled = false;
                    property.updated_at = Utc::now();

                    self.ctx.property_repo().update(&property).await?;
                    summary.record_updated(key);
                }
                None => {
                    let mut property = Property::new(
                        self.ctx.generate_id(),
                        kind,
                        street.to_string(),
                        number.to_string(),
                    );
                    apply_row(&mut property, row);

                    self.ctx.property_repo().create(&property).await?;
                    summary.record_created(key);
                }
            }
        }

        summary.finish("properties");
        info!(
            created = summary.created,
            updated = summary.updated,
            deactivated = summary.deactivated,
            ignored = summary.ignored,
            "Property import finished"
        );
        Ok(summary)
    }

    /// Project every property (disabled included) into a sheet
    #[instrument(skip(self))]
    pub async fn export_sheet(&self) -> ServiceResult<Vec<u8>> {
        let properties = self.ctx.property_repo().list(true).await?;

        let rows: Vec<Vec<String>> = properties
            .iter()
            .map(|property| {
                vec![
                    property.kind.to_string(),
                    property.street.clone(),
                    property.number.clone(),
                    property.complement.clone().unwrap_or_default(),
                    property.postal_code.clone().unwrap_or_default(),
                    property.city.clone().unwrap_or_default(),
                    property.state.clone().unwrap_or_default(),
                    property.notes.clone().unwrap_or_default(),
                    property.water_account.clone().unwrap_or_default(),
                    property.power_account.clone().unwrap_or_default(),
                    sheet::status_label(property.is_disabled).to_string(),
                ]
            })
            .collect();

        sheet::write_sheet(&SHEET_COLUMNS, &rows)
            .map_err(|e| ServiceError::internal(e.to_string()))
    }
}

/// Overwrite the mutable (non-key) fields present in the row
fn apply_row(property: &mut Property, row: &sheet::Row) {
    if let Some(complement) = row.get_owned("complemento") {
        property.complement = Some(complement);
    }
    if let Some(postal_code) = row.get_owned("cep") {
        property.postal_code = Some(postal_code);
    }
    if let Some(city) = row.get_owned("cidade") {
        property.city = Some(city);
    }
    if let Some(state) = row.get_owned("uf") {
        property.state = Some(state);
    }
    if let Some(notes) = row.get_owned("obs") {
        property.notes = Some(notes);
    }
    if let Some(water_account) = row.get_owned("copasa") {
        property.water_account = Some(water_account);
    }
    if let Some(power_account) = row.get_owned("cemig") {
        property.power_account = Some(power_account);
    }
}

/// Best-effort key fields for ignored-row details
fn row_key(row: &sheet::Row) -> String {
    format!(
        "{}|{}|{}",
        row.get("tipo").unwrap_or("?"),
        row.get("rua").unwrap_or("?"),
        row.get("numero").unwrap_or("?")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_placeholders() {
        let row = sheet::Row::from_pairs(&[("tipo", "casa"), ("numero", "12")]);
        assert_eq!(row_key(&row), "casa|?|12");
    }

    #[test]
    fn test_apply_row_leaves_absent_fields() {
        let mut property = Property::new(
            Snowflake::new(1),
            PropertyKind::Casa,
            "Rua A".to_string(),
            "1".to_string(),
        );
        property.city = Some("Belo Horizonte".to_string());

        let row = sheet::Row::from_pairs(&[("cep", "30000-000")]);
        apply_row(&mut property, &row);

        assert_eq!(property.postal_code.as_deref(), Some("30000-000"));
        assert_eq!(property.city.as_deref(), Some("Belo Horizonte"));
    }
}
