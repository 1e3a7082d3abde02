use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::LitStr;

use crate::derive_data::{MapperStruct, StructField};

/// Generate the accessor shims and the implementation of `Mappable`.
///
/// Each field gets a read shim and a write shim, each getter a shim that
/// converts its return value. Setters are registered directly.
pub(crate) fn impl_trait_mappable(data: &MapperStruct) -> TokenStream {
    let mapper_path = &data.mapper_path;
    let ident = data.ident;

    let mappable_ = crate::path::mappable_(mapper_path);
    let type_info_ = crate::path::type_info_(mapper_path);
    let type_info_cell_ = crate::path::type_info_cell_(mapper_path);
    let property_info_ = crate::path::property_info_(mapper_path);
    let method_info_ = crate::path::method_info_(mapper_path);

    let type_name = data.type_name();

    let mut shims = Vec::with_capacity(data.fields.len() * 2 + data.getters.len());
    let mut properties = Vec::with_capacity(data.fields.len());
    for field in &data.fields {
        let (read, write, tokens) = field_shims(data, field);
        shims.push(tokens);

        let name = LitStr::new(&field.name(), field.ident.span());
        let ty = field.ty;
        let mut property = quote! {
            #property_info_::new(
                #name,
                ::core::any::type_name::<#ty>(),
                #read,
                #write,
            )
        };
        if !field.is_public {
            let visibility_ = crate::path::visibility_(mapper_path);
            property = quote! { #property.with_visibility(#visibility_::Private) };
        }
        if field.is_shared() {
            let storage_ = crate::path::storage_(mapper_path);
            property = quote! { #property.with_storage(#storage_::Shared) };
        }
        properties.push(property);
    }

    let mut methods = Vec::with_capacity(data.getters.len() + data.setters.len());
    for accessor in &data.getters {
        let getter = &accessor.ident;
        let shim = format_ident!("__mapper_get_{}", getter);
        let name = LitStr::new(&accessor.name, getter.span());
        let value_ = crate::path::value_(mapper_path);
        let into_value_ = crate::path::into_value_(mapper_path);

        shims.push(quote! {
            fn #shim(this: &#ident) -> #value_<'_> {
                #into_value_::into_value(#ident::#getter(this))
            }
        });
        methods.push(quote! {
            #method_info_::getter(#name, #shim)
        });
    }
    for accessor in &data.setters {
        let setter = &accessor.ident;
        let name = LitStr::new(&accessor.name, setter.span());
        methods.push(quote! {
            #method_info_::setter(#name, #ident::#setter)
        });
    }

    quote! {
        #(#shims)*

        impl #mappable_ for #ident {
            fn type_info() -> &'static #type_info_<Self> {
                static CELL: #type_info_cell_<#ident> = #type_info_cell_::new();
                CELL.get_or_init(|| {
                    #type_info_::new(
                        #type_name,
                        [#(#properties),*],
                        [#(#methods),*],
                    )
                })
            }
        }
    }
}

/// Returns the read shim ident, the write shim ident and their definitions.
fn field_shims(
    data: &MapperStruct,
    field: &StructField,
) -> (syn::Ident, syn::Ident, TokenStream) {
    let mapper_path = &data.mapper_path;
    let ident = data.ident;
    let member = field.ident;

    let value_ = crate::path::value_(mapper_path);
    let to_value_ = crate::path::to_value_(mapper_path);
    let from_value_ = crate::path::from_value_(mapper_path);
    let map_error_ = crate::path::map_error_(mapper_path);
    let result_ = crate::path::result_();

    let read = format_ident!("__mapper_read_{}", field.name());
    let write = format_ident!("__mapper_write_{}", field.name());

    let tokens = quote! {
        fn #read(this: &#ident) -> #value_<'_> {
            #to_value_::to_value(&this.#member)
        }

        fn #write(this: &mut #ident, value: #value_<'_>) -> #result_<(), #map_error_> {
            this.#member = #from_value_::from_value(value)?;
            #result_::Ok(())
        }
    };

    (read, write, tokens)
}
