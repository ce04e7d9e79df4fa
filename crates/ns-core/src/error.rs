//! Error types for the NextStat generator-truth tools

use thiserror::Error;

/// NextStat error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error (unknown input tag, bad booking, ...)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_variant_prefix() {
        let err = Error::Config("empty collection tag".into());
        assert_eq!(err.to_string(), "Configuration error: empty collection tag");

        let err = Error::Validation("bins must be > 0".into());
        assert!(err.to_string().starts_with("Validation error"));
    }

    #[test]
    fn io_error_converts() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "events.json"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(Error::Io(_))));
    }
}
