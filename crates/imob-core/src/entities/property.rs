//! Property entity - a real-estate unit record

use chrono::{DateTime, Utc};

use crate::value_objects::{PropertyKind, Snowflake};

/// Real-estate property entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub id: Snowflake,
    pub kind: PropertyKind,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
    /// Water utility account reference
    pub water_account: Option<String>,
    /// Power utility account reference
    pub power_account: Option<String>,
    pub owner_id: Option<Snowflake>,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Create a new active Property with the required key fields
    pub fn new(id: Snowflake, kind: PropertyKind, street: String, number: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            kind,
            street,
            number,
            complement: None,
            postal_code: None,
            city: None,
            state: None,
            notes: None,
            water_account: None,
            power_account: None,
            owner_id: None,
            is_disabled: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Lower-cased natural key used to match bulk-import rows to records
    pub fn natural_key(&self) -> String {
        natural_key(self.kind, &self.street, &self.number)
    }

    /// Flip the lifecycle flag
    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
        self.updated_at = Utc::now();
    }
}

/// Build the natural key for a (kind, street, number) triple
pub fn natural_key(kind: PropertyKind, street: &str, number: &str) -> String {
    format!(
        "{}|{}|{}",
        kind.as_str(),
        street.trim().to_lowercase(),
        number.trim().to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_key_normalizes_case() {
        let property = Property::new(
            Snowflake::new(1),
            PropertyKind::Casa,
            "Rua das Flores".to_string(),
            "123A".to_string(),
        );
        assert_eq!(property.natural_key(), "casa|rua das flores|123a");
    }

    #[test]
    fn test_natural_key_trims_whitespace() {
        assert_eq!(
            natural_key(PropertyKind::Loja, " Av. Brasil ", " 42 "),
            "loja|av. brasil|42"
        );
    }

    #[test]
    fn test_new_property_is_active() {
        let property = Property::new(
            Snowflake::new(9),
            PropertyKind::Kitnet,
            "Rua A".to_string(),
            "1".to_string(),
        );
        assert!(!property.is_disabled);
        assert!(property.owner_id.is_none());
    }
}
