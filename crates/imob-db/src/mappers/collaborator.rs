//! Collaborator entity <-> model mapper

use imob_core::entities::Collaborator;
use imob_core::value_objects::Snowflake;

use crate::models::CollaboratorModel;

impl From<CollaboratorModel> for Collaborator {
    fn from(model: CollaboratorModel) -> Self {
        Collaborator {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
