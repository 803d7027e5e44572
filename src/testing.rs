//! In-memory repositories for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::auth::{
    jwt::JwtKeys,
    repo::UserRepo,
    repo_types::{NewUser, User},
};
use crate::config::JwtConfig;
use crate::error::StoreError;
use crate::projects::{
    repo::ProjectRepo,
    repo_types::{Project, ProjectFields},
};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".into(),
        issuer: "test-issuer".into(),
        audience: "test-aud".into(),
        ttl_minutes: 5,
    }
}

pub fn test_keys() -> JwtKeys {
    JwtKeys::from_config(&test_jwt_config())
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    projects: Vec<Project>,
    ticks: i64,
}

impl Tables {
    /// Strictly increasing timestamps so ordering is deterministic.
    fn now(&mut self) -> OffsetDateTime {
        self.ticks += 1;
        OffsetDateTime::UNIX_EPOCH + Duration::seconds(1_700_000_000 + self.ticks)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    /// Removes a user and, like the foreign key, their projects.
    pub fn delete_user(&self, id: Uuid) {
        let mut t = self.tables.lock().unwrap();
        t.users.retain(|u| u.id != id);
        t.projects.retain(|p| p.user_id != id);
    }
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut t = self.tables.lock().unwrap();
        if t.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation);
        }
        let created_at = t.now();
        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password: user.password_hash,
            created_at,
        };
        t.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl ProjectRepo for MemoryStore {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, StoreError> {
        let t = self.tables.lock().unwrap();
        let mut rows: Vec<Project> = t
            .projects
            .iter()
            .filter(|p| p.user_id == owner_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Project>, StoreError> {
        let t = self.tables.lock().unwrap();
        Ok(t
            .projects
            .iter()
            .find(|p| p.id == id && p.user_id == owner_id)
            .cloned())
    }

    async fn create(&self, owner_id: Uuid, fields: ProjectFields) -> Result<Project, StoreError> {
        let mut t = self.tables.lock().unwrap();
        let created_at = t.now();
        let project = Project {
            id: Uuid::new_v4(),
            title: fields.title,
            description: fields.description,
            user_id: owner_id,
            created_at,
        };
        t.projects.push(project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        fields: ProjectFields,
    ) -> Result<Option<Project>, StoreError> {
        let mut t = self.tables.lock().unwrap();
        let Some(project) = t
            .projects
            .iter_mut()
            .find(|p| p.id == id && p.user_id == owner_id)
        else {
            return Ok(None);
        };
        project.title = fields.title;
        project.description = fields.description;
        Ok(Some(project.clone()))
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.projects.len();
        t.projects.retain(|p| !(p.id == id && p.user_id == owner_id));
        Ok(t.projects.len() < before)
    }
}
