use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type, Visibility};

use super::{FieldAttributes, TypeAttributes};

/// Parsed input of `#[derive(Mappable)]`.
pub(crate) struct MapperStruct<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    pub fields: Vec<StructField<'a>>,
    pub getters: Vec<Accessor>,
    pub setters: Vec<Accessor>,
    /// Resolved path of the `mapkit_mapper` crate.
    pub mapper_path: syn::Path,
}

/// A method listed in `getters(..)` or `setters(..)`.
pub(crate) struct Accessor {
    pub ident: Ident,
    /// Name the method is registered under.
    pub name: String,
}

/// A named field and its parsed attributes.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub is_public: bool,
    pub attrs: FieldAttributes,
}

impl<'a> MapperStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`Mappable` cannot be derived for generic types",
            ));
        }

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                _ => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Mappable` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Mappable` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Mappable` cannot be derived for unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let getters = accessors(&attrs.getters, crate::utils::getter_name)?;
        let setters = accessors(&attrs.setters, crate::utils::setter_name)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new(field.span(), "expected a named field"));
            };
            fields.push(StructField {
                ident,
                ty: &field.ty,
                is_public: matches!(field.vis, Visibility::Public(_)),
                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            attrs,
            fields,
            getters,
            setters,
            mapper_path: crate::path::mapkit_mapper(),
        })
    }

    /// The name reported by the descriptor.
    pub fn type_name(&self) -> syn::LitStr {
        match &self.attrs.type_name {
            Some(name) => name.clone(),
            None => syn::LitStr::new(&self.ident.to_string(), Span::call_site()),
        }
    }
}

fn accessors(
    idents: &[Ident],
    name_of: fn(&Ident) -> syn::Result<String>,
) -> syn::Result<Vec<Accessor>> {
    idents
        .iter()
        .map(|ident| {
            Ok(Accessor {
                ident: ident.clone(),
                name: name_of(ident)?,
            })
        })
        .collect()
}

impl StructField<'_> {
    /// Property name, with any raw identifier prefix removed.
    pub fn name(&self) -> String {
        let name = self.ident.to_string();
        match name.strip_prefix("r#") {
            Some(stripped) => stripped.to_owned(),
            None => name,
        }
    }

    pub fn is_shared(&self) -> bool {
        self.attrs.shared.is_some()
    }
}
