use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, LitStr};

const GETTERS: &str = "getters";
const SETTERS: &str = "setters";
const TYPE_NAME: &str = "type_name";

/// Type-level `#[mapper(..)]` attributes.
///
/// - `getters(a, b)`: methods registered as read accessors.
/// - `setters(c)`: methods registered as write accessors.
/// - `type_name = "..."`: the name reported in descriptors and errors.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub type_name: Option<LitStr>,
    pub getters: Vec<Ident>,
    pub setters: Vec<Ident>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in super::mapper_attributes(attrs) {
            attr.parse_nested_meta(|meta| out.parse_meta(meta))?;
        }
        Ok(out)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident(GETTERS) {
            meta.parse_nested_meta(|inner| {
                push_unique(&mut self.getters, inner.path.require_ident()?)
            })
        } else if meta.path.is_ident(SETTERS) {
            meta.parse_nested_meta(|inner| {
                push_unique(&mut self.setters, inner.path.require_ident()?)
            })
        } else if meta.path.is_ident(TYPE_NAME) {
            if self.type_name.is_some() {
                return Err(meta.error("duplicate `type_name`"));
            }
            self.type_name = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error(
                "unsupported attribute, expected `getters(..)`, `setters(..)` or `type_name = \"..\"`",
            ))
        }
    }
}

fn push_unique(list: &mut Vec<Ident>, ident: &Ident) -> syn::Result<()> {
    if list.contains(ident) {
        return Err(syn::Error::new(ident.span(), "accessor listed twice"));
    }
    list.push(ident.clone());
    Ok(())
}
