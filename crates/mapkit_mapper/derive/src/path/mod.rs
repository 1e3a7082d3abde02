//! This independent module is used to provide the required path.
//! So as to minimize changes when the `mapkit_mapper` structure is modified.
//!
//! The only special feature is the path of `mapkit_mapper` itself,
//! See [`mapkit_mapper`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `mapkit_mapper` crate.
///
/// 1. For crates that depend on `mapkit_mapper`, `::mapkit_mapper` is returned here.
/// 2. For crates that depend on `mapkit`, `::mapkit::mapper` is returned here.
/// 3. For other situations, `::mapkit_mapper` is returned here, but this may be incorrect.
///
/// Reading the manifest is relatively expensive, so the path is resolved once
/// per derive and passed around.
pub(crate) fn mapkit_mapper() -> syn::Path {
    mapkit_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("mapkit_mapper"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;
mod value;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;
pub(crate) use value::*;

#[inline(always)]
pub(crate) fn macro_exports_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn mappable_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::Mappable
    }
}

#[inline(always)]
pub(crate) fn map_error_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::MapError
    }
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! {
        ::core::option::Option
    }
}

#[inline(always)]
pub(crate) fn result_() -> TokenStream {
    quote! {
        ::core::result::Result
    }
}
