use refdata_types::{CatalogKind, RecordId};
use std::fmt;

use crate::validation::FieldError;

/// Result type for refdata-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Domain type error (unknown catalog, malformed payload)
    Types(refdata_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Dataset file could not be read or written as JSON
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// No record with this id in the dataset
    NotFound { kind: CatalogKind, id: RecordId },

    /// Draft rejected by the field rules of its catalog
    Validation(Vec<FieldError>),

    /// Invalid operation or state
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::NotFound { kind, id } => write!(f, "No {} record with id '{}'", kind, id),
            Error::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Config(_)
            | Error::NotFound { .. }
            | Error::Validation(_)
            | Error::InvalidOperation(_) => None,
        }
    }
}

impl From<refdata_types::Error> for Error {
    fn from(err: refdata_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
