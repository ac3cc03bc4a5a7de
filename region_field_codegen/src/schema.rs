//! Declarative schemas rendered into accessor source files.
//!
//! A schema lists the types that store timezone-aware dates and the fields
//! each one carries. Rendering produces a formatted Rust file holding one
//! inherent `impl` block per type, suitable for `include!` from a module
//! that declares the types.

use quote::quote;
use serde::Deserialize;

use crate::error::SynthError;
use crate::spec::FieldSpec;
use crate::synth::{Target, synthesize_impl};

/// First line of every rendered file.
pub const GENERATED_HEADER: &str =
    "// @generated by region-field-gen. Edit the schema and regenerate instead.\n";

/// Top-level schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// Types to generate accessors for.
    #[serde(default)]
    pub types: Vec<TypeSchema>,
}

/// Accessors to generate for one type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSchema {
    /// Path of the type, relative to where the output is included.
    pub name: String,
    /// Accessor visibility, `pub` when absent.
    #[serde(default)]
    pub vis: Option<String>,
    /// Runtime crate path, `region_field` when absent.
    #[serde(default, rename = "crate")]
    pub crate_path: Option<String>,
    /// Date fields of the type.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl TypeSchema {
    fn target(&self) -> Result<Target, SynthError> {
        let self_ty: syn::TypePath =
            syn::parse_str(&self.name).map_err(|_| SynthError::InvalidTypePath {
                path: self.name.clone(),
            })?;
        let vis: syn::Visibility = match &self.vis {
            Some(vis) => syn::parse_str(vis).map_err(|_| SynthError::InvalidVisibility {
                type_name: self.name.clone(),
                vis: vis.clone(),
            })?,
            None => syn::parse_quote!(pub),
        };
        let runtime: Option<syn::Path> = self
            .crate_path
            .as_deref()
            .map(|path| {
                syn::parse_str(path).map_err(|_| SynthError::InvalidCratePath {
                    path: path.to_owned(),
                })
            })
            .transpose()?;
        Ok(Target::new(
            syn::Type::Path(self_ty),
            vis,
            runtime.as_ref(),
        ))
    }
}

/// Validates every field and renders the schema as formatted Rust source.
///
/// Types without fields are skipped. The output always starts with
/// [`GENERATED_HEADER`].
///
/// # Errors
///
/// Returns the first [`SynthError`] raised by a type path, visibility, crate
/// path or field specification.
pub fn render_schema(schema: &Schema) -> Result<String, SynthError> {
    let mut blocks = Vec::with_capacity(schema.types.len());
    for ty in schema.types.iter().filter(|ty| !ty.fields.is_empty()) {
        let target = ty.target()?;
        let fields = ty
            .fields
            .iter()
            .map(FieldSpec::validate)
            .collect::<Result<Vec<_>, _>>()?;
        blocks.push(synthesize_impl(&target, &fields));
    }
    let tokens = quote! { #( #blocks )* };
    let file = syn::parse2::<syn::File>(tokens).map_err(|err| SynthError::Format {
        message: err.to_string(),
    })?;
    Ok(format!("{GENERATED_HEADER}\n{}", prettyplease::unparse(&file)))
}
