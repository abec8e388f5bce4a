use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No such {entity}: {value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP-equivalent status code for callers that render errors.
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::NotFound { .. } => 404,
            DomainError::Validation(_) => 400,
            DomainError::Storage(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
