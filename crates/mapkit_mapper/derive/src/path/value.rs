use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn value_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::value::Value
    }
}

#[inline(always)]
pub(crate) fn to_value_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::value::ToValue
    }
}

#[inline(always)]
pub(crate) fn into_value_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::value::IntoValue
    }
}

#[inline(always)]
pub(crate) fn from_value_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::value::FromValue
    }
}

#[inline(always)]
pub(crate) fn map_factory_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::value::MapFactory
    }
}
