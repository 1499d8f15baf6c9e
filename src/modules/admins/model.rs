use sqlx::FromRow;
use uuid::Uuid;

/// An administrator profile row, linked one-to-one to a credential.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub credential_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Profile fields collected during admin registration.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub phone: String,
}
