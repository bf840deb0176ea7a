// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Document has no searchable text")]
    EmptyDocument,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QueryError {
    /// True for errors the calling boundary should report as a client
    /// problem (bad input) rather than an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            QueryError::Extraction(_)
                | QueryError::InvalidQuery(_)
                | QueryError::EmptyDocument
                | QueryError::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(QueryError::InvalidQuery("empty".to_string()).is_client_error());
        assert!(QueryError::EmptyDocument.is_client_error());
        assert!(QueryError::Extraction("bad header".to_string()).is_client_error());
        assert!(!QueryError::Config("missing".to_string()).is_client_error());
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::EmptyDocument;
        assert_eq!(err.to_string(), "Document has no searchable text");
    }
}
