//! Procedural macros for `region_field`.
//!
//! [`macro@date_in_region_field`] adds a timezone-aware accessor pair to a
//! struct that stores a date as a UTC instant plus a UTC offset in seconds.
//! Token synthesis lives in `region_field_codegen` so the schema generator
//! emits exactly the same accessors.

use proc_macro::TokenStream;
use quote::quote;

mod backing;
mod expand;

/// Generates `DateInRegion` accessors over a pair of backing fields.
///
/// `#[date_in_region_field("wake_up")]` requires fields `wake_up_utc:
/// DateTime<Utc>` and `wake_up_tz: i32` and adds `wake_up()` and
/// `set_wake_up(..)`. Options:
///
/// - `nullable = true` (alias `optional`): the backing fields are `Option`s
///   and the accessors take and return `Option<DateInRegion>`. Assigning
///   `None` leaves the backing fields untouched.
/// - `fallback = "error"`: the getter returns a `RegionResult` instead of
///   falling back to the local zone when the stored offset is out of range.
/// - `crate = "path"`: where the `region_field` runtime lives.
///
/// The attribute may be repeated on one struct; each use adds its own `impl`
/// block.
#[proc_macro_attribute]
pub fn date_in_region_field(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item_tokens = proc_macro2::TokenStream::from(item);
    match expand::expand(attr.into(), item_tokens.clone()) {
        Ok(tokens) => tokens.into(),
        Err(err) => {
            let error = err.to_compile_error();
            quote! {
                #error
                #item_tokens
            }
            .into()
        }
    }
}
