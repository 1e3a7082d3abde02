//! See [`Mappable`](derive_mappable).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static MAPPER_ATTRIBUTE_NAME: &str = "mapper";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Derive Mappable
///
/// `#[derive(Mappable)]` implements the following traits:
///
/// - `Mappable`: the descriptor table, built once on first use.
/// - `ToValue`: a field of this type reads as a borrowed object.
/// - `IntoValue`: a getter may return this type by value.
/// - `FromValue`: a nested map converts through `from_map`.
///
/// The type must also implement `Default` and `Clone`.
///
/// Only structs with named fields and no generic parameters are supported.
///
/// ## Properties
///
/// Every field becomes a property, in declaration order. `pub` fields are
/// public; any other visibility makes the property private, which keeps it
/// readable by `to_map` but never writable directly.
///
/// A field marked `shared` is listed in the descriptor but never mapped,
/// in either direction.
///
/// ```rust, ignore
/// #[derive(Mappable, Default, Clone)]
/// struct Counter {
///     pub hits: u32,
///     #[mapper(shared)]
///     pub total: u64,
/// }
/// ```
///
/// ## Accessors
///
/// Methods listed in `getters(..)` and `setters(..)` are registered as
/// accessors. A getter must be named `get_..`, `is_..` or `has_..` and a
/// setter `set_..`. The rest of the name goes through the transform used to
/// look properties up, so `get_full_name` is found as `getFullName` when the
/// property `full_name` is read, and `get_tag_` serves the property `tag_`.
///
/// Every listed method is registered as public, whatever its Rust
/// visibility: listing a method is what exposes it to the mapper. Leave a
/// method out of the lists to keep it away from `to_map` and `from_map`.
///
/// Getters take `&self` and return anything that converts with `IntoValue`,
/// references into `self` included. Setters take `&mut self` and exactly
/// one argument that implements `FromValue`.
///
/// ```rust, ignore
/// #[derive(Mappable, Default, Clone)]
/// #[mapper(getters(get_full_name, is_adult), setters(set_age))]
/// struct Person {
///     first: String,
///     last: String,
///     age: u32,
/// }
/// ```
///
/// These attributes can only be applied at the type level.
///
/// ## Type Name
///
/// The type name reported in errors defaults to the struct ident:
///
/// ```rust, ignore
/// #[derive(Mappable, Default, Clone)]
/// #[mapper(type_name = "billing::Invoice")]
/// struct Invoice { /* ... */ }
/// ```
#[proc_macro_derive(Mappable, attributes(mapper))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::MapperStruct::from_ast(&ast) {
        Ok(data) => impls::impl_mappable(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
