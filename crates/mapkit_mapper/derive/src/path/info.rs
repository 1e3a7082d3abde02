use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn type_info_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn type_info_cell_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::info::TypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn property_info_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::info::PropertyInfo
    }
}

#[inline(always)]
pub(crate) fn method_info_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::info::MethodInfo
    }
}

#[inline(always)]
pub(crate) fn visibility_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::info::Visibility
    }
}

#[inline(always)]
pub(crate) fn storage_(mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #mapper_path::info::Storage
    }
}
