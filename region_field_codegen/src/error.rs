//! Errors reported while validating field specifications.

use thiserror::Error;

/// Reasons a specification cannot be turned into accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// The field name was empty or normalised to nothing.
    #[error("field name must not be empty")]
    EmptyName,

    /// The normalised field name is not a usable Rust identifier.
    #[error("field name '{name}' does not form a valid identifier (normalised to '{normalised}')")]
    InvalidName {
        /// Name as written by the caller.
        name: String,
        /// Snake-case form that was rejected.
        normalised: String,
    },

    /// The fallback policy string is not recognised.
    #[error("unknown fallback policy '{value}'; expected 'local' or 'error'")]
    UnknownFallback {
        /// Value supplied by the caller.
        value: String,
    },

    /// A type path in a schema could not be parsed.
    #[error("invalid type path '{path}' in schema")]
    InvalidTypePath {
        /// Offending path text.
        path: String,
    },

    /// A visibility in a schema could not be parsed.
    #[error("invalid visibility '{vis}' for type '{type_name}'")]
    InvalidVisibility {
        /// Type the visibility was declared for.
        type_name: String,
        /// Offending visibility text.
        vis: String,
    },

    /// A runtime crate path override could not be parsed.
    #[error("invalid crate path '{path}'")]
    InvalidCratePath {
        /// Offending path text.
        path: String,
    },

    /// The generated tokens did not parse back as a Rust file.
    #[error("generated code failed to parse: {message}")]
    Format {
        /// Parser diagnostic.
        message: String,
    },
}
