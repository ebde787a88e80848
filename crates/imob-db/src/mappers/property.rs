//! Property entity <-> model mapper

use imob_core::entities::Property;
use imob_core::error::DomainError;
use imob_core::value_objects::Snowflake;

use crate::models::PropertyModel;

/// Convert PropertyModel to Property entity
///
/// The kind column is constrained by the schema; a label outside the
/// enumeration surfaces as a database error.
impl TryFrom<PropertyModel> for Property {
    type Error = DomainError;

    fn try_from(model: PropertyModel) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse()
            .map_err(|_| DomainError::DatabaseError(format!("bad kind column: {}", model.kind)))?;

        Ok(Property {
            id: Snowflake::new(model.id),
            kind,
            street: model.street,
            number: model.number,
            complement: model.complement,
            postal_code: model.postal_code,
            city: model.city,
            state: model.state,
            notes: model.notes,
            water_account: model.water_account,
            power_account: model.power_account,
            owner_id: model.owner_id.map(Snowflake::new),
            is_disabled: model.is_disabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
