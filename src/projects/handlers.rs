use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    extract::JsonBody,
    response::{ApiResponse, ApiResult},
    state::AppState,
};

use super::dto::ProjectRequest;
use super::repo_types::Project;
use super::services;

pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

// AuthUser comes before Path and JsonBody so the token is checked first.

#[instrument(skip(state, auth), fields(user_id = %auth.user_id))]
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Vec<Project>> {
    let projects = services::list_projects(state.projects.as_ref(), auth.user_id).await?;
    let count = projects.len();
    Ok(ApiResponse::ok(projects).count(count))
}

#[instrument(skip(state, auth), fields(user_id = %auth.user_id))]
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    let id = services::parse_project_id(&id)?;
    let project = services::get_project(state.projects.as_ref(), auth.user_id, id).await?;
    Ok(ApiResponse::ok(project))
}

#[instrument(skip(state, auth, payload), fields(user_id = %auth.user_id))]
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<ProjectRequest>,
) -> ApiResult<Project> {
    let project = services::create_project(state.projects.as_ref(), auth.user_id, payload).await?;
    Ok(ApiResponse::created(project).message("Project created successfully"))
}

#[instrument(skip(state, auth, payload), fields(user_id = %auth.user_id))]
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ProjectRequest>,
) -> ApiResult<Project> {
    let id = services::parse_project_id(&id)?;
    let project =
        services::update_project(state.projects.as_ref(), auth.user_id, id, payload).await?;
    Ok(ApiResponse::ok(project).message("Project updated successfully"))
}

#[instrument(skip(state, auth), fields(user_id = %auth.user_id))]
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = services::parse_project_id(&id)?;
    services::delete_project(state.projects.as_ref(), auth.user_id, id).await?;
    Ok(ApiResponse::message_only("Project deleted successfully"))
}
