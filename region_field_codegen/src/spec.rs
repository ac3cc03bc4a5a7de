//! Field specifications and their validated form.

use std::fmt;
use std::str::FromStr;

use heck::ToSnakeCase;
use quote::format_ident;
use serde::Deserialize;
use syn::Ident;

use crate::error::SynthError;

/// What a generated getter does when the stored offset has no zone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Present the instant in the process-local zone.
    #[default]
    Local,
    /// Return `region_field::RegionError` from the getter.
    Error,
}

impl FallbackPolicy {
    /// Attribute and schema spelling of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = SynthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "local" => Ok(Self::Local),
            "error" => Ok(Self::Error),
            other => Err(SynthError::UnknownFallback {
                value: other.to_owned(),
            }),
        }
    }
}

/// A date field to expose as a `DateInRegion` accessor pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    /// Base name of the accessor and its backing fields.
    pub name: String,
    /// Whether the backing fields are `Option`s.
    #[serde(default, alias = "optional")]
    pub nullable: bool,
    /// Behaviour when the stored offset cannot be turned into a zone.
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

impl FieldSpec {
    /// Creates a non-nullable spec with the local fallback.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            fallback: FallbackPolicy::Local,
        }
    }

    /// Sets whether the backing fields are optional.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the fallback policy.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Normalises the name and derives every identifier the accessors need.
    ///
    /// Names already written in lower case are used verbatim, so
    /// `date__x` and `_date` keep their underscores. Names containing
    /// capitals are converted from camel or Pascal case (`wakeUp` becomes
    /// `wake_up`), keeping any leading underscores.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::EmptyName`] for an empty name and
    /// [`SynthError::InvalidName`] when the name contains characters that
    /// cannot appear in an identifier or its normalised form is not a
    /// non-keyword identifier.
    pub fn validate(&self) -> Result<ValidatedField, SynthError> {
        if self.name.trim().is_empty() {
            return Err(SynthError::EmptyName);
        }
        let normalised = normalise(&self.name);
        let invalid = || SynthError::InvalidName {
            name: self.name.clone(),
            normalised: normalised.clone(),
        };
        if !self
            .name
            .chars()
            .all(|ch| ch == '_' || ch.is_alphanumeric())
        {
            return Err(invalid());
        }
        let accessor: Ident = syn::parse_str(&normalised).map_err(|_| invalid())?;
        Ok(ValidatedField {
            setter: format_ident!("set_{}", accessor),
            utc_field: format_ident!("{}_utc", accessor),
            tz_field: format_ident!("{}_tz", accessor),
            accessor,
            nullable: self.nullable,
            fallback: self.fallback,
        })
    }
}

fn normalise(name: &str) -> String {
    if !name.chars().any(char::is_uppercase) {
        return name.to_owned();
    }
    let body = name.trim_start_matches('_');
    let prefix = name.len() - body.len();
    format!("{}{}", "_".repeat(prefix), body.to_snake_case())
}

/// Identifiers and options of a spec that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedField {
    /// Getter name.
    pub accessor: Ident,
    /// Setter name, `set_<accessor>`.
    pub setter: Ident,
    /// Backing field holding the UTC instant.
    pub utc_field: Ident,
    /// Backing field holding the offset in seconds.
    pub tz_field: Ident,
    /// Whether the backing fields are `Option`s.
    pub nullable: bool,
    /// Behaviour when the stored offset has no zone.
    pub fallback: FallbackPolicy,
}
