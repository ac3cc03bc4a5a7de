//! Parsing of `#[date_in_region_field(...)]` arguments.
//!
//! The first argument is the positional field name; the rest are
//! `key = literal` options. Every malformed shape is reported as a spanned
//! error so the caller sees it at compile time.

use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, Lit, LitBool, LitStr, Token};

use crate::error::SynthError;
use crate::spec::{FallbackPolicy, FieldSpec};

const USAGE: &str = "expected the field name as a string literal, e.g. \
                     `#[date_in_region_field(\"wake_up\")]`";

/// Arguments of one `#[date_in_region_field(...)]` attribute.
#[derive(Debug, Clone)]
pub struct FieldArgs {
    /// Field name literal.
    pub name: LitStr,
    /// `nullable = ...` (or `optional = ...`).
    pub nullable: Option<LitBool>,
    /// `fallback = "..."`.
    pub fallback: Option<LitStr>,
    /// `crate = "..."`, already parsed as a path.
    pub crate_path: Option<syn::Path>,
}

impl FieldArgs {
    /// Converts the parsed literals into a [`FieldSpec`].
    ///
    /// # Errors
    ///
    /// Fails, spanned at the `fallback` literal, when the policy is unknown.
    pub fn to_spec(&self) -> syn::Result<FieldSpec> {
        let mut spec = FieldSpec::new(self.name.value())
            .with_nullable(self.nullable.as_ref().is_some_and(|lit| lit.value));
        if let Some(lit) = &self.fallback {
            let policy = lit
                .value()
                .parse::<FallbackPolicy>()
                .map_err(|err| syn::Error::new(lit.span(), err))?;
            spec = spec.with_fallback(policy);
        }
        Ok(spec)
    }
}

impl Parse for FieldArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() || !input.peek(LitStr) {
            return Err(input.error(USAGE));
        }
        let mut args = Self {
            name: input.parse()?,
            nullable: None,
            fallback: None,
            crate_path: None,
        };

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let key = input.call(Ident::parse_any)?;
            if key == "true" || key == "false" {
                return Err(syn::Error::new(
                    key.span(),
                    format!("name the flag explicitly: `nullable = {key}`"),
                ));
            }
            input.parse::<Token![=]>()?;
            args.parse_option(&key, input)?;
        }
        Ok(args)
    }
}

impl FieldArgs {
    fn parse_option(&mut self, key: &Ident, input: ParseStream) -> syn::Result<()> {
        match key.to_string().as_str() {
            "nullable" | "optional" => {
                let lit = parse_lit(input, key, |lit| match lit {
                    Lit::Bool(b) => Some(b),
                    _ => None,
                })?;
                set_once(&mut self.nullable, lit, key, "nullable")
            }
            "fallback" => {
                let lit = lit_str(input, key)?;
                set_once(&mut self.fallback, lit, key, "fallback")
            }
            "crate" => {
                let lit = lit_str(input, key)?;
                let path = lit.parse::<syn::Path>().map_err(|_| {
                    syn::Error::new(
                        lit.span(),
                        SynthError::InvalidCratePath { path: lit.value() },
                    )
                })?;
                set_once(&mut self.crate_path, path, key, "crate")
            }
            other => Err(syn::Error::new(
                key.span(),
                format!(
                    "unknown date_in_region_field option `{other}`; \
                     expected `nullable`, `optional`, `fallback` or `crate`"
                ),
            )),
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &Ident, canonical: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            key.span(),
            format!("`{canonical}` is specified more than once"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

/// Parses a literal option value using `extractor`, naming the expected kind
/// in the error.
fn parse_lit<T, F>(input: ParseStream, key: &Ident, extractor: F) -> syn::Result<T>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = input.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| {
        let type_name = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("literal")
            .to_lowercase();
        let display_type = match type_name.as_str() {
            "litstr" => "string literal",
            "litbool" => "boolean literal",
            other => other,
        };
        syn::Error::new(span, format!("{key} must be a {display_type}"))
    })
}

fn lit_str(input: ParseStream, key: &Ident) -> syn::Result<LitStr> {
    parse_lit(input, key, |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}
