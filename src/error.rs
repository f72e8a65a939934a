//! Error types for form validation and backend requests

use thiserror::Error;

/// Rejected before anything leaves the machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{file} is not a supported file (expected {expected})")]
    UnsupportedFileType { file: String, expected: String },
}

impl ValidationError {
    /// Toast title matching the kind of problem
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) if *field == "Source file" => "Missing Source Code",
            ValidationError::MissingField(_) => "Missing Input",
            ValidationError::UnsupportedFileType { .. } => "Unsupported File",
        }
    }
}

/// Conversion did not produce an output
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("backend responded with HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("conversion rejected by the backend")]
    Rejected,

    #[error("{0} conversions are not handled by this backend")]
    Unsupported(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_file_uses_source_code_title() {
        assert_eq!(
            ValidationError::MissingField("Source file").title(),
            "Missing Source Code"
        );
        assert_eq!(ValidationError::MissingField("Work directory").title(), "Missing Input");
    }

    #[test]
    fn unsupported_file_message_names_file() {
        let err = ValidationError::UnsupportedFileType {
            file: "notes.txt".into(),
            expected: ".zip".into(),
        };
        assert_eq!(err.to_string(), "notes.txt is not a supported file (expected .zip)");
    }
}
