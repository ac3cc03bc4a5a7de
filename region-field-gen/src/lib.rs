//! Library interface for `region-field-gen`.
//!
//! Loads a TOML schema of timezone-aware date fields and renders it into a
//! Rust source file of accessor `impl` blocks, using the same synthesizer as
//! the `#[date_in_region_field]` attribute.

pub mod cli;
pub mod error;
pub mod generate;
