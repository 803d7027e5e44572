use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::projects::repo_types::{Project, ProjectFields};

/// Every query is filtered by owner as well as id.
#[async_trait]
pub trait ProjectRepo: Send + Sync {
    /// Newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, StoreError>;
    async fn get(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Project>, StoreError>;
    async fn create(&self, owner_id: Uuid, fields: ProjectFields) -> Result<Project, StoreError>;
    /// `None` when no project with that id belongs to the owner.
    async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        fields: ProjectFields,
    ) -> Result<Option<Project>, StoreError>;
    /// Returns whether a row was removed.
    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct PgProjectRepo {
    db: PgPool,
}

impl PgProjectRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepo for PgProjectRepo {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, user_id, created_at
            FROM projects
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, user_id, created_at
            FROM projects
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn create(&self, owner_id: Uuid, fields: ProjectFields) -> Result<Project, StoreError> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, user_id, created_at
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(owner_id)
        .fetch_one(&self.db)
        .await
        .map_err(StoreError::from_sqlx)?;
        Ok(row)
    }

    async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        fields: ProjectFields,
    ) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
               SET title = $1, description = $2
             WHERE id = $3 AND user_id = $4
            RETURNING id, title, description, user_id, created_at
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let res = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
