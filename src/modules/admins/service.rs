use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{Admin, NewAdmin};

pub struct AdminService;

impl AdminService {
    /// Persists an admin profile as part of a registration transaction.
    #[instrument(skip(tx))]
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        profile: NewAdmin,
        credential_id: Uuid,
    ) -> Result<Admin, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (credential_id, name, email, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING id, credential_id, name, email, phone, created_at",
        )
        .bind(credential_id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .fetch_one(&mut **tx)
        .await?;

        Ok(admin)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>(
            "SELECT id, credential_id, name, email, phone, created_at
             FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Admin not found")))
    }

    #[instrument(skip(db))]
    pub async fn find_all(db: &PgPool) -> Result<Vec<Admin>, AppError> {
        let admins = sqlx::query_as::<_, Admin>(
            "SELECT id, credential_id, name, email, phone, created_at
             FROM admins ORDER BY created_at",
        )
        .fetch_all(db)
        .await?;

        Ok(admins)
    }

    /// Deletes the profile only; the credential has its own lifecycle.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Admin not found")));
        }

        Ok(())
    }
}
