//! Provide some tools for parsing `#[mapper(..)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

use syn::Attribute;

/// Attributes named `mapper`.
fn mapper_attributes(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(crate::MAPPER_ATTRIBUTE_NAME))
}
