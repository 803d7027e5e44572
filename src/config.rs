use anyhow::Context;
use serde::Deserialize;

/// Upper bound for `JWT_TTL_MINUTES` (one year).
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Exposes internal error detail in 500 responses.
    pub development: bool,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `var`, so precedence rules are testable
    /// without touching the process environment.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let parse = |key: &str| var(key).and_then(|v| v.parse::<i64>().ok());

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => database_url_from_parts(&var)?,
        };
        let jwt = JwtConfig {
            secret: var("JWT_SECRET").context("JWT_SECRET must be set")?,
            issuer: var("JWT_ISSUER").unwrap_or_else(|| "project-tracker".into()),
            audience: var("JWT_AUDIENCE").unwrap_or_else(|| "project-tracker-users".into()),
            ttl_minutes: parse("JWT_TTL_MINUTES")
                .unwrap_or(60 * 24)
                .clamp(1, MAX_TTL_MINUTES),
        };
        let environment = var("APP_ENV").or_else(|| var("NODE_ENV")).unwrap_or_default();

        Ok(Self {
            database_url,
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            host: var("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: var("APP_PORT")
                .and_then(|v| v.parse().ok())
                .or_else(|| var("PORT").and_then(|v| v.parse().ok()))
                .unwrap_or(5000),
            development: environment.eq_ignore_ascii_case("development"),
            jwt,
        })
    }
}

/// Builds a connection string from the discrete `DB_*` variables.
fn database_url_from_parts(var: &impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    let host = var("DB_HOST").context("DATABASE_URL or DB_HOST must be set")?;
    let port = var("DB_PORT").unwrap_or_else(|| "5432".into());
    let name = var("DB_NAME").context("DB_NAME must be set")?;
    let user = var("DB_USER").context("DB_USER must be set")?;
    let password = var("DB_PASSWORD").unwrap_or_default();
    Ok(format_database_url(&host, &port, &name, &user, &password))
}

fn format_database_url(host: &str, port: &str, name: &str, user: &str, password: &str) -> String {
    if password.is_empty() {
        format!("postgres://{user}@{host}:{port}/{name}")
    } else {
        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}
