use thiserror::Error;

/// Errors surfaced by the engine's public entry points.
///
/// Degenerate input (empty text, nothing left after filtering) is never an
/// error; it produces empty or neutral results instead.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Unsupported file format: {0}")]
    Unsupported(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task interrupted: {0}")]
    Interrupted(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
