use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    /// Base URL of the auth/organization engine.
    pub auth_base_url: String,
    pub bind_port: u16,
    /// How long soft-deleted rows are kept before the purge binary removes
    /// them for good.
    pub soft_delete_retention_days: i64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/laxdb".to_string());

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        let auth_base_url =
            env::var("AUTH_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());

        let bind_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let soft_delete_retention_days = env::var("SOFT_DELETE_RETENTION_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| anyhow!("Invalid SOFT_DELETE_RETENTION_DAYS value"))?;

        Ok(Config {
            database_url,
            database_max_connections,
            auth_base_url,
            bind_port,
            soft_delete_retention_days,
        })
    }
}
