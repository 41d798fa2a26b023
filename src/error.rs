//! Error types for list extraction and regrouping

use thiserror::Error;

/// Errors that abort an extraction run
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Malformed path '{entry}': expected at least <dir>/<subdir>/<file>")]
    MalformedPath { entry: String },

    #[error("List not found: {name}")]
    MissingList { name: String },

    #[error("Unrecognized line {line_number}: {line}")]
    UnrecognizedLine { line_number: usize, line: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_path_message_names_entry() {
        let err = ExtractError::MalformedPath {
            entry: "foo.c".to_string(),
        };
        assert!(err.to_string().contains("'foo.c'"));
    }

    #[test]
    fn test_unrecognized_line_message() {
        let err = ExtractError::UnrecognizedLine {
            line_number: 7,
            line: "all: build".to_string(),
        };
        assert_eq!(err.to_string(), "Unrecognized line 7: all: build");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err: ExtractError = io.into();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
