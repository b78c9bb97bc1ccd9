use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate user ID: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, UserqlError>;
