use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::Credential;

pub struct CredentialService;

impl CredentialService {
    /// Inserts a credential inside a registration transaction.
    ///
    /// The unique index on `lower(username)` is the authoritative duplicate
    /// check; a violation here is translated to Conflict so a race lost
    /// against a concurrent registration never surfaces as a storage error.
    #[instrument(skip(tx, password_hash))]
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        username: &str,
        password_hash: &str,
        role_id: Uuid,
    ) -> Result<Credential, AppError> {
        sqlx::query_as::<_, Credential>(
            "INSERT INTO credentials (username, password_hash, role_id)
             VALUES ($1, $2, $3)
             RETURNING id, username, password_hash, role_id, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .bind(role_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow::anyhow!("Username already exists"));
                }
            }
            AppError::from(e)
        })
    }

    /// Case-insensitive username lookup, matching the comparison the
    /// uniqueness index enforces.
    #[instrument(skip(db))]
    pub async fn find_by_username(
        db: &PgPool,
        username: &str,
    ) -> Result<Option<Credential>, AppError> {
        let credential = sqlx::query_as::<_, Credential>(
            "SELECT id, username, password_hash, role_id, created_at
             FROM credentials WHERE lower(username) = lower($1)",
        )
        .bind(username)
        .fetch_optional(db)
        .await?;

        Ok(credential)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Credential>, AppError> {
        let credential = sqlx::query_as::<_, Credential>(
            "SELECT id, username, password_hash, role_id, created_at
             FROM credentials WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(credential)
    }

    /// Fast-path duplicate check used by the registration flows before the
    /// insert. The constraint still decides under concurrency.
    #[instrument(skip(tx))]
    pub async fn username_taken(
        tx: &mut Transaction<'_, Postgres>,
        username: &str,
    ) -> Result<bool, AppError> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM credentials WHERE lower(username) = lower($1))",
        )
        .bind(username)
        .fetch_one(&mut **tx)
        .await?;

        Ok(taken)
    }
}
