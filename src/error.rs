//! Error types for loading road maps.

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum InstanceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },
}

pub type Result<T> = std::result::Result<T, InstanceError>;

impl InstanceError {
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
