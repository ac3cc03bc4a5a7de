//! Expansion of `#[date_in_region_field(...)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Item, ItemStruct};

use region_field_codegen::{FieldArgs, Target, synthesize_impl};

use crate::backing;

/// Parses the attribute and struct, then appends the accessor `impl` block
/// to the unchanged struct.
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let args: FieldArgs = syn::parse2(attr)?;
    let parsed = parse_struct(item)?;
    let field = args
        .to_spec()?
        .validate()
        .map_err(|err| syn::Error::new(args.name.span(), err))?;
    backing::check(&parsed, &field, &args.name)?;

    let target = Target::for_struct(&parsed, args.crate_path.as_ref());
    let accessors = synthesize_impl(&target, std::slice::from_ref(&field));
    Ok(quote! {
        #parsed
        #accessors
    })
}

fn parse_struct(item: TokenStream) -> syn::Result<ItemStruct> {
    match syn::parse2::<Item>(item)? {
        Item::Struct(item_struct) => Ok(item_struct),
        other => Err(syn::Error::new_spanned(
            other,
            "date_in_region_field can only be applied to structs",
        )),
    }
}

#[cfg(test)]
mod tests {
    //! Tests for attribute expansion.

    use super::*;
    use anyhow::{Context, Result, anyhow, ensure};
    use rstest::rstest;
    use syn::{File, ImplItem};

    fn expand_ok(attr: TokenStream, item: TokenStream) -> Result<File> {
        let tokens = expand(attr, item).map_err(|err| anyhow!("expansion failed: {err}"))?;
        syn::parse2(tokens).context("expansion output parses as a file")
    }

    fn expand_err(attr: TokenStream, item: TokenStream) -> Result<String> {
        match expand(attr, item) {
            Ok(tokens) => Err(anyhow!("expected an error, got {tokens}")),
            Err(err) => Ok(err.to_string()),
        }
    }

    fn methods(file: &File) -> Vec<String> {
        file.items
            .iter()
            .filter_map(|item| match item {
                Item::Impl(block) => Some(block),
                _ => None,
            })
            .flat_map(|block| &block.items)
            .filter_map(|item| match item {
                ImplItem::Fn(func) => Some(func.sig.ident.to_string()),
                _ => None,
            })
            .collect()
    }

    fn sleep_log() -> TokenStream {
        quote! {
            pub struct SleepLog {
                wake_up_utc: chrono::DateTime<chrono::Utc>,
                wake_up_tz: i32,
                bedtime_utc: Option<chrono::DateTime<chrono::Utc>>,
                bedtime_tz: Option<i32>,
            }
        }
    }

    #[rstest]
    fn keeps_struct_and_adds_required_accessors() -> Result<()> {
        let file = expand_ok(quote!("wakeUp"), sleep_log())?;
        let Some(Item::Struct(item)) = file.items.first() else {
            return Err(anyhow!("struct must come first"));
        };
        ensure!(item.ident == "SleepLog", "struct preserved");
        ensure!(
            methods(&file) == ["wake_up", "set_wake_up"],
            "methods: {:?}",
            methods(&file)
        );
        Ok(())
    }

    #[rstest]
    #[case::nullable(quote!("bedtime", nullable = true))]
    #[case::optional(quote!("bedtime", optional = true))]
    fn adds_nullable_accessors(#[case] attr: TokenStream) -> Result<()> {
        let file = expand_ok(attr, sleep_log())?;
        ensure!(
            methods(&file) == ["bedtime", "set_bedtime"],
            "methods: {:?}",
            methods(&file)
        );
        Ok(())
    }

    #[rstest]
    fn keeps_remaining_attributes_for_later_expansion() -> Result<()> {
        let item = quote! {
            #[date_in_region_field("bedtime", nullable = true)]
            #[derive(Debug)]
            struct SleepLog {
                wake_up_utc: chrono::DateTime<chrono::Utc>,
                wake_up_tz: i32,
                bedtime_utc: Option<chrono::DateTime<chrono::Utc>>,
                bedtime_tz: Option<i32>,
            }
        };
        let file = expand_ok(quote!("wake_up"), item)?;
        let Some(Item::Struct(expanded)) = file.items.first() else {
            return Err(anyhow!("struct must come first"));
        };
        ensure!(expanded.attrs.len() == 2, "stacked attributes must survive");
        Ok(())
    }

    #[rstest]
    fn lower_case_names_target_fields_verbatim() -> Result<()> {
        let item = quote! {
            struct Log {
                date__x_utc: chrono::DateTime<chrono::Utc>,
                date__x_tz: i32,
            }
        };
        let file = expand_ok(quote!("date__x"), item)?;
        ensure!(
            methods(&file) == ["date__x", "set_date__x"],
            "methods: {:?}",
            methods(&file)
        );
        Ok(())
    }

    #[rstest]
    fn expansion_is_deterministic() -> Result<()> {
        let first = expand(quote!("bedtime", nullable = true), sleep_log())?.to_string();
        let second = expand(quote!("bedtime", nullable = true), sleep_log())?.to_string();
        ensure!(first == second, "expansion must be byte-identical");
        Ok(())
    }

    #[rstest]
    #[case::no_arguments(quote!(), sleep_log(), "expected the field name")]
    #[case::not_a_string(quote!(wake_up), sleep_log(), "expected the field name")]
    #[case::empty_name(quote!(""), sleep_log(), "field name must not be empty")]
    #[case::keyword(quote!("type"), sleep_log(), "does not form a valid identifier")]
    #[case::space_in_name(quote!("wake up"), sleep_log(), "does not form a valid identifier")]
    #[case::unknown_fallback(quote!("wake_up", fallback = "retry"), sleep_log(), "unknown fallback policy")]
    #[case::missing_field(quote!("alarm"), sleep_log(), "`SleepLog` has no `alarm_utc` field")]
    #[case::enum_item(quote!("date"), quote!(enum Log { A }), "can only be applied to structs")]
    fn malformed_input_is_a_compile_error(
        #[case] attr: TokenStream,
        #[case] item: TokenStream,
        #[case] fragment: &str,
    ) -> Result<()> {
        let message = expand_err(attr, item)?;
        ensure!(
            message.contains(fragment),
            "expected {fragment:?} in {message:?}"
        );
        Ok(())
    }
}
