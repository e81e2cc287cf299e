// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown alert kind: {0}")]
    UnknownKind(String),

    #[error("Unknown action role: {0}")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
