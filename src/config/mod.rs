use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub service: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: String,
}

impl MongoConfig {
    /// Compose the connection URI. Credentials are included only when both
    /// username and password are set.
    pub fn connection_uri(&self) -> String {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => format!(
                "mongodb://{}:{}@{}:{}",
                username, password, self.service, self.port
            ),
            _ => format!("mongodb://{}:{}", self.service, self.port),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SongConfig {
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub seed_file: String,
}

impl SongConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let server = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        // MONGODB_SERVICE has no default; a missing host is a startup failure.
        let service = env::var("MONGODB_SERVICE").map_err(|_| {
            AppError::ConfigError(anyhow::anyhow!("MONGODB_SERVICE is required but not set"))
        })?;

        let port = match env::var("MONGODB_PORT") {
            Ok(val) => val.parse().map_err(|_| {
                AppError::ConfigError(anyhow::anyhow!("MONGODB_PORT is not a valid port: {}", val))
            })?,
            Err(_) => 27017,
        };

        Ok(SongConfig {
            server,
            mongodb: MongoConfig {
                service,
                port,
                username: env::var("MONGODB_USERNAME").ok(),
                password: env::var("MONGODB_PASSWORD").ok(),
                database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "songs".to_string()),
            },
            seed_file: env::var("SEED_FILE").unwrap_or_else(|_| "data/songs.json".to_string()),
        })
    }
}
