use sqlx::FromRow;
use uuid::Uuid;

/// A login principal: username, password hash and role reference.
#[derive(Debug, Clone, FromRow)]
pub struct Credential {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub role_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
