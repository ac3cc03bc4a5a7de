//! Checks that the annotated struct declares the backing fields.

use syn::{Fields, GenericArgument, ItemStruct, LitStr, PathArguments, Type};

use region_field_codegen::ValidatedField;

/// Returns the inner type if `ty` is `Option<T>`.
///
/// The check is shallow: it inspects only the final path segment, so
/// `std::option::Option<T>` and `Option<T>` both match.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Verifies that `<name>_utc` and `<name>_tz` exist and that their
/// optionality matches the `nullable` flag.
pub(crate) fn check(item: &ItemStruct, field: &ValidatedField, name: &LitStr) -> syn::Result<()> {
    let Fields::Named(named) = &item.fields else {
        return Err(syn::Error::new_spanned(
            &item.ident,
            "date_in_region_field requires a struct with named fields",
        ));
    };

    for backing in [&field.utc_field, &field.tz_field] {
        let Some(declared) = named
            .named
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|ident| ident == backing))
        else {
            return Err(syn::Error::new(
                name.span(),
                format!(
                    "`{}` has no `{backing}` field; `{}` is stored in `{}` (UTC instant) \
                     and `{}` (offset in seconds)",
                    item.ident, field.accessor, field.utc_field, field.tz_field,
                ),
            ));
        };

        let is_option = option_inner(&declared.ty).is_some();
        if field.nullable && !is_option {
            return Err(syn::Error::new_spanned(
                &declared.ty,
                format!("`{backing}` must be an `Option` because `{}` is nullable", field.accessor),
            ));
        }
        if !field.nullable && is_option {
            return Err(syn::Error::new_spanned(
                &declared.ty,
                format!("`{backing}` is an `Option`; add `nullable = true` to the attribute"),
            ));
        }
    }
    Ok(())
}
