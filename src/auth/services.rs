use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{
    dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest},
    jwt::JwtKeys,
    password::{hash_password_blocking, verify_password_blocking},
    repo::UserRepo,
    repo_types::NewUser,
};
use crate::error::{AppError, StoreError};

const DUPLICATE_EMAIL: &str = "Email already registered";

pub async fn register(
    users: &dyn UserRepo,
    keys: &JwtKeys,
    req: RegisterRequest,
) -> Result<AuthResponse, AppError> {
    let req = req.validate()?;

    if users.find_by_email(&req.email).await?.is_some() {
        warn!(email = %req.email, "email already registered");
        return Err(AppError::Conflict(DUPLICATE_EMAIL.into()));
    }

    let password_hash = hash_password_blocking(req.password).await?;
    let user = users
        .create(NewUser {
            name: req.name,
            email: req.email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            // lost a race with a concurrent registration
            StoreError::UniqueViolation => AppError::Conflict(DUPLICATE_EMAIL.into()),
            other => other.into(),
        })?;

    let token = keys.issue(&user).map_err(|e| AppError::Internal(e.into()))?;
    info!(user_id = %user.id, "user registered");
    Ok(AuthResponse {
        user: user.into(),
        token,
    })
}

/// Unknown email and wrong password produce the same error.
pub async fn login(
    users: &dyn UserRepo,
    keys: &JwtKeys,
    req: LoginRequest,
) -> Result<AuthResponse, AppError> {
    let req = req.validate()?;

    let Some(user) = users.find_by_email(&req.email).await? else {
        warn!("login with unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password_blocking(req.password, user.password.clone()).await? {
        warn!(user_id = %user.id, "login with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let token = keys.issue(&user).map_err(|e| AppError::Internal(e.into()))?;
    info!(user_id = %user.id, "user logged in");
    Ok(AuthResponse {
        user: user.into(),
        token,
    })
}

pub async fn current_user(users: &dyn UserRepo, user_id: Uuid) -> Result<PublicUser, AppError> {
    users
        .find_by_id(user_id)
        .await?
        .map(PublicUser::from)
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}
