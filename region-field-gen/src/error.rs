//! Error types for `region-field-gen`.

use camino::Utf8PathBuf;
use region_field_codegen::SynthError;
use thiserror::Error;

/// Errors surfaced by the `region-field-gen` pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenError {
    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not valid TOML or has unknown keys.
    #[error("failed to parse schema {path}: {source}")]
    Schema {
        /// Schema file path.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// A schema entry could not be synthesized.
    #[error("invalid schema {path}: {source}")]
    Synth {
        /// Schema file path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: SynthError,
    },

    /// `--check` found the output file out of date.
    #[error("{0} is out of date; rerun region-field-gen without --check")]
    Stale(Utf8PathBuf),
}
