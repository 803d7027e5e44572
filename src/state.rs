use crate::auth::jwt::JwtKeys;
use crate::auth::repo::{PgUserRepo, UserRepo};
use crate::config::{AppConfig, JwtConfig};
use crate::projects::repo::{PgProjectRepo, ProjectRepo};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub keys: JwtKeys,
    /// Exposes internal error detail in 500 responses.
    pub development: bool,
    pub users: Arc<dyn UserRepo>,
    pub projects: Arc<dyn ProjectRepo>,
}

impl AppState {
    /// Wires the PostgreSQL repositories around one shared pool.
    pub fn new(db: PgPool, config: &AppConfig) -> Self {
        Self::from_parts(
            &config.jwt,
            config.development,
            Arc::new(PgUserRepo::new(db.clone())),
            Arc::new(PgProjectRepo::new(db)),
        )
    }

    pub fn from_parts(
        jwt: &JwtConfig,
        development: bool,
        users: Arc<dyn UserRepo>,
        projects: Arc<dyn ProjectRepo>,
    ) -> Self {
        Self {
            keys: JwtKeys::from_config(jwt),
            development,
            users,
            projects,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::testing::{test_jwt_config, MemoryStore};

        let store = Arc::new(MemoryStore::default());
        Self::from_parts(&test_jwt_config(), false, store.clone(), store)
    }
}
