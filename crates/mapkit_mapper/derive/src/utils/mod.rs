//! Small helpers shared by the derive implementation.

use mapkit_utils::naming::{READ_PREFIXES, WRITE_PREFIX, accessor_name};
use syn::Ident;

/// The name an accessor method is registered under.
///
/// The method ident must be `{prefix}_{property}`, with one of `prefixes`.
/// The property part goes through the same transform the runtime applies
/// to property names, so `get_full_name` registers as `getFullName` and
/// `get_tag_` as `getTag_`.
fn registered_name(ident: &Ident, prefixes: &[&str]) -> syn::Result<String> {
    let name = ident.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name);

    for prefix in prefixes {
        if let Some(property) = name.strip_prefix(prefix).and_then(|rest| rest.strip_prefix('_')) {
            return Ok(accessor_name(prefix, property));
        }
    }

    let expected: Vec<String> = prefixes.iter().map(|p| format!("`{p}_..`")).collect();
    Err(syn::Error::new(
        ident.span(),
        format!("accessor name must start with {}", expected.join(" or ")),
    ))
}

/// Registered name of a method listed in `getters(..)`.
pub(crate) fn getter_name(ident: &Ident) -> syn::Result<String> {
    registered_name(ident, &READ_PREFIXES)
}

/// Registered name of a method listed in `setters(..)`.
pub(crate) fn setter_name(ident: &Ident) -> syn::Result<String> {
    registered_name(ident, &[WRITE_PREFIX])
}

#[cfg(test)]
mod tests {
    use super::{getter_name, setter_name};
    use mapkit_utils::naming::accessor_name;
    use proc_macro2::Span;
    use syn::Ident;

    fn ident(name: &str) -> Ident {
        Ident::new(name, Span::call_site())
    }

    #[test]
    fn matches_property_lookup() {
        let cases = [
            ("get_full_name", "get", "full_name"),
            ("is_adult", "is", "adult"),
            ("has_tag_", "has", "tag_"),
            ("get_tag__", "get", "tag__"),
            ("get_café", "get", "café"),
            ("get_été", "get", "été"),
        ];
        for (method, prefix, property) in cases {
            assert_eq!(getter_name(&ident(method)).unwrap(), accessor_name(prefix, property));
        }

        assert_eq!(getter_name(&ident("get_tag_")).unwrap(), "getTag_");
        assert_eq!(setter_name(&ident("set_x")).unwrap(), "setX");
        assert_eq!(setter_name(&Ident::new_raw("set_type", Span::call_site())).unwrap(), "setType");
    }

    #[test]
    fn prefix_is_required() {
        assert!(getter_name(&ident("full_name")).is_err());
        assert!(getter_name(&ident("issue_id")).is_err());
        assert!(getter_name(&ident("set_name")).is_err());
        assert!(setter_name(&ident("get_name")).is_err());
    }
}
