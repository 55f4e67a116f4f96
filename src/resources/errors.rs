use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },
    #[error("Invalid bounds for {0}: every axis needs finite min <= max")]
    InvalidBounds(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
