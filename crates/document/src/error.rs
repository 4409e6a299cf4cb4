use pdflax_types::ColorError;
use thiserror::Error;

/// Errors surfaced by document operations. Apart from [`DocumentError::Color`]
/// (the one usage error raised locally), everything wraps a failure of the
/// underlying PDF library or the output stream, unmodified.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("Unknown font family: '{0}'")]
    UnknownFont(String),
    #[error("Invalid document operation: {0}")]
    InvalidOperation(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
