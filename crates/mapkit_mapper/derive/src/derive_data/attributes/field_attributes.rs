use proc_macro2::Span;
use syn::Attribute;

const SHARED: &str = "shared";

/// Field-level `#[mapper(..)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[mapper(shared)]`: listed in the descriptor, never mapped.
    pub shared: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in super::mapper_attributes(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(SHARED) {
                    if out.shared.is_some() {
                        return Err(meta.error("duplicate `shared`"));
                    }
                    out.shared = Some(meta.input.span());
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `shared`"))
                }
            })?;
        }
        Ok(out)
    }
}
