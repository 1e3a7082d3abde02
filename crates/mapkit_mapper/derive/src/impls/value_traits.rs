use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::MapperStruct;

/// Generate `ToValue`, `IntoValue` and `FromValue`.
///
/// A mappable type reads as an object and is written from a map.
pub(crate) fn impl_value_traits(data: &MapperStruct) -> TokenStream {
    let mapper_path = &data.mapper_path;
    let ident = data.ident;

    let value_ = crate::path::value_(mapper_path);
    let to_value_ = crate::path::to_value_(mapper_path);
    let into_value_ = crate::path::into_value_(mapper_path);
    let from_value_ = crate::path::from_value_(mapper_path);
    let map_factory_ = crate::path::map_factory_(mapper_path);
    let map_error_ = crate::path::map_error_(mapper_path);
    let macro_exports_ = crate::path::macro_exports_(mapper_path);
    let option_ = crate::path::option_();
    let result_ = crate::path::result_();

    quote! {
        impl #to_value_ for #ident {
            #[inline]
            fn to_value(&self) -> #value_<'_> {
                #macro_exports_::borrow_object(self)
            }
        }

        impl<'a> #into_value_<'a> for #ident {
            #[inline]
            fn into_value(self) -> #value_<'a> {
                #macro_exports_::into_object(self)
            }
        }

        impl #from_value_ for #ident {
            #[inline]
            fn from_value(value: #value_<'_>) -> #result_<Self, #map_error_> {
                #macro_exports_::from_value::<Self>(value)
            }

            #[inline]
            fn map_factory() -> #option_<#map_factory_> {
                #option_::Some(#macro_exports_::map_factory::<Self>)
            }
        }
    }
}
