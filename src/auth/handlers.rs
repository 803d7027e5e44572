use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest},
        extractors::AuthUser,
        services,
    },
    extract::JsonBody,
    response::{ApiResponse, ApiResult},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> ApiResult<AuthResponse> {
    let res = services::register(state.users.as_ref(), &state.keys, payload).await?;
    Ok(ApiResponse::created(res).message("User registered successfully"))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> ApiResult<AuthResponse> {
    let res = services::login(state.users.as_ref(), &state.keys, payload).await?;
    Ok(ApiResponse::ok(res).message("Login successful"))
}

#[instrument(skip(state, auth), fields(user_id = %auth.user_id, email = %auth.email))]
pub async fn get_me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<PublicUser> {
    let user = services::current_user(state.users.as_ref(), auth.user_id).await?;
    Ok(ApiResponse::ok(user))
}
