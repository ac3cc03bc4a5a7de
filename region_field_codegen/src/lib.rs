//! Accessor synthesis for timezone-aware date fields.
//!
//! A [`FieldSpec`] names a date stored as a UTC instant (`<name>_utc`) plus a
//! UTC offset in seconds (`<name>_tz`). [`synthesize`] turns a validated spec
//! into a getter and setter that present the pair as one
//! `region_field::DateInRegion`. The same synthesizer backs both the
//! `#[date_in_region_field]` attribute and the schema-driven
//! `region-field-gen` tool, so the two always emit identical accessors.

mod args;
mod error;
mod schema;
mod spec;
mod synth;

pub use args::FieldArgs;
pub use error::SynthError;
pub use schema::{GENERATED_HEADER, Schema, TypeSchema, render_schema};
pub use spec::{FallbackPolicy, FieldSpec, ValidatedField};
pub use synth::{Target, synthesize, synthesize_impl};
