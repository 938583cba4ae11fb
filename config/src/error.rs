use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}
