use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::admins::model::NewAdmin;
use crate::modules::admins::service::AdminService;
use crate::modules::credentials::service::CredentialService;
use crate::modules::customers::model::NewCustomer;
use crate::modules::customers::service::CustomerService;
use crate::modules::roles::model::Role;
use crate::modules::roles::service::RoleService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{
    LoginRequest, LoginResponse, RegisterAdminRequest, RegisterCustomerRequest, RegisterResponse,
};

pub struct AuthService;

impl AuthService {
    /// Registers a customer account: role lookup, credential and profile
    /// creation in one transaction. Any failure rolls back every write.
    #[instrument(skip(db, dto))]
    pub async fn register_customer(
        db: &PgPool,
        dto: RegisterCustomerRequest,
    ) -> Result<RegisterResponse, AppError> {
        let mut tx = db.begin().await?;

        let role = RoleService::get_or_create(&mut tx, Role::Customer).await?;

        if CredentialService::username_taken(&mut tx, &dto.username).await? {
            return Err(AppError::conflict(anyhow::anyhow!("Username already exists")));
        }

        let password_hash = hash_password(&dto.password)?;

        let credential =
            CredentialService::create(&mut tx, &dto.username, &password_hash, role.id).await?;

        CustomerService::create(
            &mut tx,
            NewCustomer {
                name: dto.customer_name,
                address: dto.address,
                mobile_phone: dto.mobile_phone,
                email: dto.email,
            },
            credential.id,
        )
        .await?;

        tx.commit().await?;

        Ok(RegisterResponse {
            username: credential.username,
            role: Role::Customer,
        })
    }

    /// Registers an admin account. Same strategy as the customer flow: the
    /// pre-check is a fast path, the storage constraint decides under races.
    #[instrument(skip(db, dto))]
    pub async fn register_admin(
        db: &PgPool,
        dto: RegisterAdminRequest,
    ) -> Result<RegisterResponse, AppError> {
        let mut tx = db.begin().await?;

        let role = RoleService::get_or_create(&mut tx, Role::Admin).await?;

        if CredentialService::username_taken(&mut tx, &dto.username).await? {
            return Err(AppError::conflict(anyhow::anyhow!("Username already exists")));
        }

        let password_hash = hash_password(&dto.password)?;

        let credential =
            CredentialService::create(&mut tx, &dto.username, &password_hash, role.id).await?;

        AdminService::create(
            &mut tx,
            NewAdmin {
                name: dto.username,
                email: dto.email,
                phone: dto.mobile_phone,
            },
            credential.id,
        )
        .await?;

        tx.commit().await?;

        Ok(RegisterResponse {
            username: credential.username,
            role: Role::Admin,
        })
    }

    /// Verifies credentials and issues a token. Unknown username and wrong
    /// password produce the same error so neither case is disclosed.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let credential = CredentialService::find_by_username(db, &dto.username)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid username or password")))?;

        if !verify_password(&dto.password, &credential.password_hash)? {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid username or password"
            )));
        }

        let role_name: (String,) = sqlx::query_as("SELECT name FROM roles WHERE id = $1")
            .bind(credential.role_id)
            .fetch_one(db)
            .await?;

        let role = Role::parse(&role_name.0).ok_or_else(|| {
            AppError::internal(anyhow::anyhow!("Unknown role: {}", role_name.0))
        })?;

        let token = create_access_token(credential.id, &credential.username, role, jwt_config)?;

        Ok(LoginResponse { token, role })
    }
}
