use billpad_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An input line that is not a desk command.
    #[error("{0}")]
    Parse(String),

    #[error("no row {row}; the invoice has {len} item(s)")]
    NoSuchRow { row: usize, len: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not serialize invoice: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeskError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Errors that end the session rather than just the current line.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DeskError::Io(_))
    }
}
