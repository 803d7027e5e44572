use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::projects::{
    dto::ProjectRequest,
    repo::ProjectRepo,
    repo_types::Project,
};

fn not_found() -> AppError {
    AppError::NotFound("Project not found".into())
}

/// A path id that is not a UUID cannot name an existing project.
pub fn parse_project_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| not_found())
}

pub async fn list_projects(
    repo: &dyn ProjectRepo,
    owner_id: Uuid,
) -> Result<Vec<Project>, AppError> {
    Ok(repo.list_by_owner(owner_id).await?)
}

pub async fn get_project(
    repo: &dyn ProjectRepo,
    owner_id: Uuid,
    id: Uuid,
) -> Result<Project, AppError> {
    repo.get(owner_id, id).await?.ok_or_else(not_found)
}

pub async fn create_project(
    repo: &dyn ProjectRepo,
    owner_id: Uuid,
    req: ProjectRequest,
) -> Result<Project, AppError> {
    let fields = req.validate()?;
    let project = repo.create(owner_id, fields).await?;
    info!(project_id = %project.id, %owner_id, "project created");
    Ok(project)
}

/// Replaces both title and description.
pub async fn update_project(
    repo: &dyn ProjectRepo,
    owner_id: Uuid,
    id: Uuid,
    req: ProjectRequest,
) -> Result<Project, AppError> {
    let fields = req.validate()?;
    match repo.update(owner_id, id, fields).await? {
        Some(project) => {
            info!(project_id = %id, %owner_id, "project updated");
            Ok(project)
        }
        None => {
            warn!(project_id = %id, %owner_id, "update of missing or foreign project");
            Err(not_found())
        }
    }
}

pub async fn delete_project(
    repo: &dyn ProjectRepo,
    owner_id: Uuid,
    id: Uuid,
) -> Result<(), AppError> {
    if repo.delete(owner_id, id).await? {
        info!(project_id = %id, %owner_id, "project deleted");
        Ok(())
    } else {
        warn!(project_id = %id, %owner_id, "delete of missing or foreign project");
        Err(not_found())
    }
}
