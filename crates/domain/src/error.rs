//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SerbisyoError`] via `#[from]` — no stringly-typed variants at the top
//! level. Adapters map these onto their own surfaces (the HTTP adapter
//! turns them into status codes).

use thiserror::Error;

/// Top-level error for the serbisyo workspace.
#[derive(Debug, Error)]
pub enum SerbisyoError {
    /// A domain invariant was violated or an input was malformed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A requested record does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The provider directory failed to answer.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// Domain invariant violations and malformed inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A catalog entry id was empty.
    #[error("id must not be empty")]
    EmptyId,
    /// A catalog entry title was empty.
    #[error("title must not be empty")]
    EmptyTitle,
    /// A provider name was empty.
    #[error("name must not be empty")]
    EmptyName,
    /// A category label was empty.
    #[error("category must not be empty")]
    EmptyCategory,
    /// A coordinate string did not parse as `lat,lng`.
    #[error("malformed coordinates, expected \"lat,lng\"")]
    MalformedCoordinates,
    /// A provider id was not a valid UUID.
    #[error("malformed provider id")]
    MalformedProviderId,
}

/// A lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Record kind, e.g. `"Service"` or `"Provider"`.
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

/// Failures reported by a provider directory implementation.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The backing directory could not be queried.
    #[error("provider directory unavailable: {0}")]
    Unavailable(String),
}
