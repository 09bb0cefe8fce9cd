use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskboardError {
    /// Whether retrying the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Connection(_) => true,
            Self::Service { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(TaskboardError::Connection("timeout".to_string()).is_transient());
        assert!(TaskboardError::Service {
            status: 503,
            message: "unavailable".to_string()
        }
        .is_transient());
        assert!(!TaskboardError::Service {
            status: 404,
            message: "missing".to_string()
        }
        .is_transient());
        assert!(!TaskboardError::Validation("empty title".to_string()).is_transient());
    }
}
