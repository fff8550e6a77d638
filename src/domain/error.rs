//! Domain errors

use thiserror::Error;

use super::cms::CmsVersion;

/// Errors raised while building or materializing a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Page size of zero makes the current page undefined
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// No adapter is registered for the requested CMS version
    #[error("No query adapter registered for {0}")]
    UnsupportedVersion(CmsVersion),

    /// The target CMS version can't sort on this column
    #[error("Sorting on '{column}' is not supported by {version}")]
    UnsupportedSort {
        version: CmsVersion,
        column: &'static str,
    },

    /// The query can't be expressed for the target broker
    #[error("Invalid query: {0}")]
    Invalid(String),
}

/// Errors raised by serializer backends
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The model graph couldn't be encoded
    #[error("Failed to encode {model}: {reason}")]
    Encode { model: &'static str, reason: String },

    /// The input couldn't be parsed into the requested model
    #[error("Failed to decode {model}: {reason}")]
    Decode { model: &'static str, reason: String },

    /// The backend is switched off or not usable right now
    #[error("Serializer backend '{0}' is not available")]
    Unavailable(&'static str),
}

/// Errors raised by content sources and navigation lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Invalid TCM URI '{0}'")]
    InvalidUri(String),
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;
