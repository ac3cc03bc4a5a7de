//! Token synthesis for `DateInRegion` accessor pairs.
//!
//! Each field yields a getter named after the field and a `set_` setter. The
//! getter composes `<name>_utc` and `<name>_tz`; the setter decomposes an
//! assigned value back into them. Nullable fields wrap everything in
//! `Option`, and an assignment of `None` leaves both backing fields as they
//! were.

use proc_macro2::TokenStream;
use quote::quote;

use crate::spec::{FallbackPolicy, ValidatedField};

/// The type that receives generated accessors.
#[derive(Debug, Clone)]
pub struct Target {
    self_ty: syn::Type,
    generics: syn::Generics,
    vis: syn::Visibility,
    krate: TokenStream,
}

impl Target {
    /// Targets a non-generic type path.
    ///
    /// Generated code calls the runtime through `runtime`, or through
    /// `region_field` when no path is given.
    #[must_use]
    pub fn new(self_ty: syn::Type, vis: syn::Visibility, runtime: Option<&syn::Path>) -> Self {
        Self {
            self_ty,
            generics: syn::Generics::default(),
            vis,
            krate: runtime_path(runtime),
        }
    }

    /// Targets a struct declaration, carrying over its generics and
    /// visibility.
    #[must_use]
    pub fn for_struct(item: &syn::ItemStruct, runtime: Option<&syn::Path>) -> Self {
        let ident = &item.ident;
        let (_, ty_generics, _) = item.generics.split_for_impl();
        Self {
            self_ty: syn::parse_quote!(#ident #ty_generics),
            generics: item.generics.clone(),
            vis: item.vis.clone(),
            krate: runtime_path(runtime),
        }
    }
}

fn runtime_path(runtime: Option<&syn::Path>) -> TokenStream {
    runtime.map_or_else(|| quote! { region_field }, |path| quote! { #path })
}

/// Emits the getter and setter for one field.
///
/// The output is a pair of associated functions meant to sit inside an
/// inherent `impl` block; see [`synthesize_impl`].
#[must_use]
pub fn synthesize(target: &Target, field: &ValidatedField) -> TokenStream {
    let getter = if field.nullable {
        nullable_getter(target, field)
    } else {
        required_getter(target, field)
    };
    let setter = if field.nullable {
        nullable_setter(target, field)
    } else {
        required_setter(target, field)
    };
    quote! {
        #getter
        #setter
    }
}

/// Wraps the accessors of `fields` in a single inherent `impl` block.
#[must_use]
pub fn synthesize_impl(target: &Target, fields: &[ValidatedField]) -> TokenStream {
    let self_ty = &target.self_ty;
    let (impl_generics, _, where_clause) = target.generics.split_for_impl();
    let accessors = fields.iter().map(|field| synthesize(target, field));
    quote! {
        impl #impl_generics #self_ty #where_clause {
            #( #accessors )*
        }
    }
}

fn getter_doc(field: &ValidatedField) -> String {
    let ValidatedField {
        utc_field,
        tz_field,
        ..
    } = field;
    let fallback = match field.fallback {
        FallbackPolicy::Local => "falling back to the local zone when the offset is out of range",
        FallbackPolicy::Error => "failing when the offset is out of range",
    };
    if field.nullable {
        format!(
            " Returns `{utc_field}` presented in the zone stored in `{tz_field}`, {fallback}. \
             `None` unless both fields are set."
        )
    } else {
        format!(" Returns `{utc_field}` presented in the zone stored in `{tz_field}`, {fallback}.")
    }
}

fn setter_doc(field: &ValidatedField) -> String {
    let ValidatedField {
        utc_field,
        tz_field,
        ..
    } = field;
    if field.nullable {
        format!(
            " Stores the instant of `value` in `{utc_field}` and its UTC offset in `{tz_field}`. \
             Assigning `None` leaves both fields unchanged."
        )
    } else {
        format!(" Stores the instant of `value` in `{utc_field}` and its UTC offset in `{tz_field}`.")
    }
}

fn required_getter(target: &Target, field: &ValidatedField) -> TokenStream {
    let Target { vis, krate, .. } = target;
    let ValidatedField {
        accessor,
        utc_field,
        tz_field,
        ..
    } = field;
    let doc = getter_doc(field);
    match field.fallback {
        FallbackPolicy::Local => quote! {
            #[doc = #doc]
            #[must_use]
            #vis fn #accessor(&self) -> #krate::DateInRegion {
                #krate::in_region(self.#utc_field, self.#tz_field)
            }
        },
        FallbackPolicy::Error => quote! {
            #[doc = #doc]
            #vis fn #accessor(&self) -> #krate::RegionResult<#krate::DateInRegion> {
                #krate::try_in_region(self.#utc_field, self.#tz_field)
            }
        },
    }
}

fn nullable_getter(target: &Target, field: &ValidatedField) -> TokenStream {
    let Target { vis, krate, .. } = target;
    let ValidatedField {
        accessor,
        utc_field,
        tz_field,
        ..
    } = field;
    let doc = getter_doc(field);
    match field.fallback {
        FallbackPolicy::Local => quote! {
            #[doc = #doc]
            #[must_use]
            #vis fn #accessor(&self) -> ::core::option::Option<#krate::DateInRegion> {
                match (self.#tz_field, self.#utc_field) {
                    (::core::option::Option::Some(seconds), ::core::option::Option::Some(utc)) => {
                        ::core::option::Option::Some(#krate::in_region(utc, seconds))
                    }
                    _ => ::core::option::Option::None,
                }
            }
        },
        FallbackPolicy::Error => quote! {
            #[doc = #doc]
            #vis fn #accessor(
                &self,
            ) -> #krate::RegionResult<::core::option::Option<#krate::DateInRegion>> {
                match (self.#tz_field, self.#utc_field) {
                    (::core::option::Option::Some(seconds), ::core::option::Option::Some(utc)) => {
                        #krate::try_in_region(utc, seconds).map(::core::option::Option::Some)
                    }
                    _ => ::core::result::Result::Ok(::core::option::Option::None),
                }
            }
        },
    }
}

fn required_setter(target: &Target, field: &ValidatedField) -> TokenStream {
    let Target { vis, krate, .. } = target;
    let ValidatedField {
        setter,
        utc_field,
        tz_field,
        ..
    } = field;
    let doc = setter_doc(field);
    quote! {
        #[doc = #doc]
        #vis fn #setter(&mut self, value: #krate::DateInRegion) {
            let (utc, seconds) = #krate::split(&value);
            self.#utc_field = utc;
            self.#tz_field = seconds;
        }
    }
}

fn nullable_setter(target: &Target, field: &ValidatedField) -> TokenStream {
    let Target { vis, krate, .. } = target;
    let ValidatedField {
        setter,
        utc_field,
        tz_field,
        ..
    } = field;
    let doc = setter_doc(field);
    quote! {
        #[doc = #doc]
        #vis fn #setter(&mut self, value: ::core::option::Option<#krate::DateInRegion>) {
            if let ::core::option::Option::Some(assigned) = value {
                let (utc, seconds) = #krate::split(&assigned);
                self.#utc_field = ::core::option::Option::Some(utc);
                self.#tz_field = ::core::option::Option::Some(seconds);
            }
        }
    }
}
