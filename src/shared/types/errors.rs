use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::{ContentError, QueryError, SerializationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;
