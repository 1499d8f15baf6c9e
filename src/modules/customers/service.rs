use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{Customer, CustomerResponse, NewCustomer};

pub struct CustomerService;

impl CustomerService {
    /// Persists a customer profile as part of a registration transaction.
    #[instrument(skip(tx))]
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        profile: NewCustomer,
        credential_id: Uuid,
    ) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (credential_id, name, address, mobile_phone, email)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, credential_id, name, address, mobile_phone, email, created_at",
        )
        .bind(credential_id)
        .bind(&profile.name)
        .bind(&profile.address)
        .bind(&profile.mobile_phone)
        .bind(&profile.email)
        .fetch_one(&mut **tx)
        .await?;

        Ok(customer)
    }

    #[instrument(skip(db))]
    pub async fn get_all(db: &PgPool) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, credential_id, name, address, mobile_phone, email, created_at
             FROM customers ORDER BY created_at",
        )
        .fetch_all(db)
        .await?;

        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<CustomerResponse, AppError> {
        sqlx::query_as::<_, Customer>(
            "SELECT id, credential_id, name, address, mobile_phone, email, created_at
             FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .map(CustomerResponse::from)
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Customer not found")))
    }

    /// Deletes the profile only; the credential has its own lifecycle.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Customer not found")));
        }

        Ok(())
    }
}
