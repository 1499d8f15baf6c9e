use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A customer profile row, linked one-to-one to a credential.
#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub credential_id: Uuid,
    pub name: String,
    pub address: String,
    pub mobile_phone: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Profile fields collected during customer registration.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub mobile_phone: String,
    pub email: String,
}

/// Wire shape for customer reads: stored `name` becomes `customerName`,
/// `mobile_phone` becomes `phone`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: Uuid,
    pub customer_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            customer_name: customer.name,
            address: customer.address,
            phone: customer.mobile_phone,
            email: customer.email,
        }
    }
}
