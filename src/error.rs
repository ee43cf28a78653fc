//! Error types for the stay pricing service.
//!
//! The pricing functions themselves never fail. These errors cover what
//! surrounds them: loading the resort catalog, reading settings, resolving
//! catalog ids in API requests and running the server.

use thiserror::Error;

/// The main error type for the stay pricing service.
///
/// # Example
///
/// ```
/// use stay_pricing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/resort.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/resort.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Two catalog records of the same kind share an id.
    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateCatalogEntry {
        /// The kind of record ("accommodation type", "add-on").
        kind: String,
        /// The repeated id.
        id: String,
    },

    /// Accommodation type id was not found in the catalog.
    #[error("Accommodation type not found: {id}")]
    AccommodationTypeNotFound {
        /// The id that was not found.
        id: String,
    },

    /// Add-on id was not found in the catalog.
    #[error("Add-on not found: {id}")]
    AddonNotFound {
        /// The id that was not found.
        id: String,
    },

    /// A request field failed validation.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A server setting could not be used.
    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting {
        /// The environment variable or flag.
        key: String,
        /// A description of the problem.
        message: String,
    },

    /// The HTTP server failed to bind or run.
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
