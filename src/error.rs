use std::path::Path;
use thiserror::Error;

/// Everything that can go wrong while loading job or tracking data.
///
/// Variants carry plain strings so the error can be cloned into UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("invalid data in {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    #[error("unknown status code \"{0}\"")]
    UnknownStatus(String),

    #[error("job id {0} appears more than once")]
    DuplicateJobId(u64),
}

impl AppError {
    pub fn read(path: &Path, err: &std::io::Error) -> Self {
        AppError::Read {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    pub fn parse(source_name: impl Into<String>, err: &serde_json::Error) -> Self {
        AppError::Parse {
            source_name: source_name.into(),
            reason: err.to_string(),
        }
    }
}
