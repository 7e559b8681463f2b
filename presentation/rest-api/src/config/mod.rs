pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod server_config;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing: {0}")]
    Missing(&'static str),
    #[error("config.invalid: {name}={value}")]
    Invalid { name: &'static str, value: String },
}
