//! PostgreSQL implementation of PropertyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use imob_core::entities::Property;
use imob_core::traits::{PropertyRepository, RepoResult};
use imob_core::value_objects::{PropertyKind, Snowflake};

use crate::models::PropertyModel;

use super::error::{map_db_error, property_not_found};

const PROPERTY_COLUMNS: &str = "id, kind, street, number, complement, postal_code, city, state, \
                                notes, water_account, power_account, owner_id, is_disabled, \
                                created_at, updated_at";

/// PostgreSQL implementation of PropertyRepository
#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    /// Create a new PgPropertyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>> {
        let result = sqlx::query_as::<_, PropertyModel>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Property::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_natural_key(
        &self,
        kind: PropertyKind,
        street: &str,
        number: &str,
    ) -> RepoResult<Option<Property>> {
        let result = sqlx::query_as::<_, PropertyModel>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties \
             WHERE kind = $1 AND street = $2 AND number = $3"
        ))
        .bind(kind.as_str())
        .bind(street)
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Property::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, include_disabled: bool) -> RepoResult<Vec<Property>> {
        let result = sqlx::query_as::<_, PropertyModel>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties \
             WHERE ($1 OR is_disabled = FALSE) ORDER BY street, number"
        ))
        .bind(include_disabled)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.into_iter().map(Property::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, property: &Property) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO properties (id, kind, street, number, complement, postal_code, city,
                                    state, notes, water_account, power_account, owner_id,
                                    is_disabled, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ",
        )
        .bind(property.id.into_inner())
        .bind(property.kind.as_str())
        .bind(&property.street)
        .bind(&property.number)
        .bind(&property.complement)
        .bind(&property.postal_code)
        .bind(&property.city)
        .bind(&property.state)
        .bind(&property.notes)
        .bind(&property.water_account)
        .bind(&property.power_account)
        .bind(property.owner_id.map(Snowflake::into_inner))
        .bind(property.is_disabled)
        .bind(property.created_at)
        .bind(property.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, property: &Property) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE properties
            SET kind = $2, street = $3, number = $4, complement = $5, postal_code = $6,
                city = $7, state = $8, notes = $9, water_account = $10, power_account = $11,
                owner_id = $12, is_disabled = $13, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(property.id.into_inner())
        .bind(property.kind.as_str())
        .bind(&property.street)
        .bind(&property.number)
        .bind(&property.complement)
        .bind(&property.postal_code)
        .bind(&property.city)
        .bind(&property.state)
        .bind(&property.notes)
        .bind(&property.water_account)
        .bind(&property.power_account)
        .bind(property.owner_id.map(Snowflake::into_inner))
        .bind(property.is_disabled)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(property_not_found(property.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(property_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_disabled(&self, id: Snowflake, disabled: bool) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE properties SET is_disabled = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id.into_inner())
        .bind(disabled)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(property_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn disable_all(&self) -> RepoResult<u64> {
        let result = sqlx::query(
            "UPDATE properties SET is_disabled = TRUE, updated_at = NOW() WHERE is_disabled = FALSE",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPropertyRepository>();
    }
}
