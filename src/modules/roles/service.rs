use sqlx::{Postgres, Transaction};
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{Role, RoleRecord};

pub struct RoleService;

impl RoleService {
    /// Looks up a role by name, creating the row on first reference.
    ///
    /// The upsert resolves a concurrent creation to the existing row
    /// instead of surfacing the unique violation, so two registrations
    /// racing on a fresh database both get the same role id.
    #[instrument(skip(tx))]
    pub async fn get_or_create(
        tx: &mut Transaction<'_, Postgres>,
        role: Role,
    ) -> Result<RoleRecord, AppError> {
        let existing = sqlx::query_as::<_, RoleRecord>("SELECT id, name FROM roles WHERE name = $1")
            .bind(role.as_str())
            .fetch_optional(&mut **tx)
            .await?;

        if let Some(record) = existing {
            return Ok(record);
        }

        let record = sqlx::query_as::<_, RoleRecord>(
            "INSERT INTO roles (name) VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING id, name",
        )
        .bind(role.as_str())
        .fetch_one(&mut **tx)
        .await?;

        Ok(record)
    }
}
