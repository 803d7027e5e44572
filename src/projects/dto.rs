use serde::Deserialize;

use crate::error::{AppError, FieldError};
use crate::projects::repo_types::ProjectFields;

const MAX_TITLE_LEN: usize = 100;

/// Body of `POST /projects` and `PUT /projects/:id`.
#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectRequest {
    pub fn validate(self) -> Result<ProjectFields, AppError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation(vec![FieldError::new(
                "title",
                "Title is required",
            )]));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::Validation(vec![FieldError::new(
                "title",
                format!("Title must be at most {MAX_TITLE_LEN} characters long"),
            )]));
        }
        Ok(ProjectFields {
            title,
            description: self.description,
        })
    }
}
