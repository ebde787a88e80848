//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use imob_core::entities::{Collaborator, Property, Questionnaire, SurveyResponse, User};

use super::responses::{
    CollaboratorResponse, PropertyResponse, QuestionnaireResponse, ResponseDetail,
    SessionUserResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            roles: user.roles.clone(),
            cpf: user.cpf.clone(),
            phone: user.phone.clone(),
            cargo: user.cargo.clone(),
            is_disabled: user.is_disabled,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for SessionUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            roles: user.roles.clone(),
        }
    }
}

// ============================================================================
// Property Mappers
// ============================================================================

impl From<&Property> for PropertyResponse {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.to_string(),
            kind: property.kind,
            street: property.street.clone(),
            number: property.number.clone(),
            complement: property.complement.clone(),
            postal_code: property.postal_code.clone(),
            city: property.city.clone(),
            state: property.state.clone(),
            notes: property.notes.clone(),
            water_account: property.water_account.clone(),
            power_account: property.power_account.clone(),
            owner_id: property.owner_id.map(|id| id.to_string()),
            is_disabled: property.is_disabled,
            created_at: property.created_at,
            updated_at: property.updated_at,
        }
    }
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self::from(&property)
    }
}

// ============================================================================
// Collaborator Mappers
// ============================================================================

impl From<&Collaborator> for CollaboratorResponse {
    fn from(collaborator: &Collaborator) -> Self {
        Self {
            id: collaborator.id.to_string(),
            name: collaborator.name.clone(),
            email: collaborator.email.clone(),
            phone: collaborator.phone.clone(),
            created_at: collaborator.created_at,
            updated_at: collaborator.updated_at,
        }
    }
}

impl From<Collaborator> for CollaboratorResponse {
    fn from(collaborator: Collaborator) -> Self {
        Self::from(&collaborator)
    }
}

// ============================================================================
// Questionnaire / Response Mappers
// ============================================================================

impl From<&Questionnaire> for QuestionnaireResponse {
    fn from(questionnaire: &Questionnaire) -> Self {
        Self {
            id: questionnaire.id.to_string(),
            question: questionnaire.question.clone(),
            is_deleted: questionnaire.is_deleted,
            created_at: questionnaire.created_at,
            updated_at: questionnaire.updated_at,
        }
    }
}

impl From<Questionnaire> for QuestionnaireResponse {
    fn from(questionnaire: Questionnaire) -> Self {
        Self::from(&questionnaire)
    }
}

impl From<(SurveyResponse, Option<Questionnaire>)> for ResponseDetail {
    fn from((response, questionnaire): (SurveyResponse, Option<Questionnaire>)) -> Self {
        Self {
            id: response.id.to_string(),
            answer: response.answer,
            questionnaire_id: response.questionnaire_id.to_string(),
            questionnaire: questionnaire.map(QuestionnaireResponse::from),
            created_at: response.created_at,
            updated_at: response.updated_at,
        }
    }
}

impl From<&SurveyResponse> for ResponseDetail {
    fn from(response: &SurveyResponse) -> Self {
        Self {
            id: response.id.to_string(),
            answer: response.answer.clone(),
            questionnaire_id: response.questionnaire_id.to_string(),
            questionnaire: None,
            created_at: response.created_at,
            updated_at: response.updated_at,
        }
    }
}
