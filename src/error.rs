// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Entry {0} not found")]
    NotFound(String),

    #[error("Database Error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// A stored row could not be turned back into a [`crate::models::DiaryRecord`].
    #[error("Malformed stored entry: {0}")]
    Decode(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Editor exited with a non-zero status")]
    EditorError,
}

impl DiaryError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotFound(_) => 2,
            DiaryError::InvalidInput(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DiaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = DiaryError::NotFound("3f2a".to_string());
        assert_eq!(err.to_string(), "Entry 3f2a not found");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_sqlite_errors_become_persistence_errors() {
        let err: DiaryError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, DiaryError::Persistence(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_input_exit_code() {
        assert_eq!(DiaryError::InvalidInput("x".into()).exit_code(), 3);
    }
}
