// -----------------------------------------------------------------------------
// Modules

mod trait_mappable;
mod value_traits;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::MapperStruct;

use trait_mappable::impl_trait_mappable;
use value_traits::impl_value_traits;

/// Generate every implementation of `#[derive(Mappable)]`.
///
/// The output is wrapped in an anonymous const so that the accessor shims
/// stay out of the caller's namespace.
pub(crate) fn impl_mappable(data: &MapperStruct) -> TokenStream {
    let mappable_tokens = impl_trait_mappable(data);
    let value_tokens = impl_value_traits(data);

    quote! {
        const _: () = {
            #mappable_tokens

            #value_tokens
        };
    }
}
