use std::env;

use poem::middleware::Cors;

use super::{
    ConfigError, cors_config, database_config::DatabaseSettings, server_config::ServerConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |name: &str| env::var(name).ok();
        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            cors: cors_config::init_cors(lookup),
            database: DatabaseSettings::from_lookup(lookup)?,
        })
    }
}
