//! Error types for Folio

use thiserror::Error;

/// Result type alias using Folio's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Folio error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Generation errors (E001-E099)
    #[error("Batch of {requested} records exceeds the limit of {max}. Raise it with `folio config set generator.max_batch {requested}`.")]
    BatchTooLarge { requested: usize, max: usize },

    // Catalog errors (E100-E199)
    #[error("Project '{0}' not found. Run `folio browse` to see available projects.")]
    ProjectNotFound(String),

    #[error("Duplicate project id '{0}'. Curated ids must not overlap generated ids.")]
    DuplicateProjectId(String),

    #[error("Unknown category '{0}'. Valid categories: AI/ML, DevOps/SRE, Infrastructure, Social Impact.")]
    UnknownCategory(String),

    #[error("Unknown status '{0}'. Valid statuses: completed, in-progress, maintained.")]
    UnknownStatus(String),

    // Input errors (E200-E299)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Config errors (E300-E399)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Serialization errors (E400-E499)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::BatchTooLarge { .. } => "E001",
            Self::ProjectNotFound(_) => "E100",
            Self::DuplicateProjectId(_) => "E101",
            Self::UnknownCategory(_) => "E102",
            Self::UnknownStatus(_) => "E103",
            Self::InvalidInput(_) => "E200",
            Self::ConfigError(_) => "E300",
            Self::Serialization(_) => "E400",
            Self::Parse { .. } => "E401",
            Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::BatchTooLarge { requested, .. } => Some(format!(
                "folio config set generator.max_batch {}",
                requested
            )),
            Self::ProjectNotFound(_) => Some("folio browse".to_string()),
            Self::DuplicateProjectId(_) => {
                Some("folio config set generator.id_offset <higher value>".to_string())
            }
            Self::ConfigError(_) => Some("folio config reset".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_too_large() {
        let error = Error::BatchTooLarge {
            requested: 20_000,
            max: 10_000,
        };
        assert_eq!(error.code(), "E001");
        assert_eq!(
            error.suggestion(),
            Some("folio config set generator.max_batch 20000".to_string())
        );
        assert!(error.to_string().contains("10000"));
    }

    #[test]
    fn test_project_not_found() {
        let error = Error::ProjectNotFound("project-42".to_string());
        assert_eq!(error.code(), "E100");
        assert_eq!(error.suggestion(), Some("folio browse".to_string()));
        assert!(error.to_string().contains("project-42"));
    }

    #[test]
    fn test_parse_error_reports_line() {
        let error = Error::Parse {
            line: 7,
            message: "expected value".to_string(),
        };
        assert_eq!(error.code(), "E401");
        assert_eq!(error.suggestion(), None);
        assert_eq!(error.to_string(), "Parse error on line 7: expected value");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let error: Error = io.into();
        assert_eq!(error.code(), "E9999");
        assert_eq!(error.to_string(), "missing.json");
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let error: Error = err.into();
        assert_eq!(error.code(), "E400");
    }
}
