use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] reg_config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] reg_db::StoreError),

    #[error("Hasher setup failed: {0}")]
    Hasher(#[from] reg_auth::RegistrationError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
