//! JSON text in and out of the key-value structure.
//!
//! The mapper never looks inside [`JsonOptions`]; it is handed to the codec
//! as is.

use alloc::string::String;
use alloc::vec::Vec;

use serde_core::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

use crate::MapError;
use crate::value::{Value, ValueMap};

// -----------------------------------------------------------------------------
// JsonOptions

/// Output layout of [`encode`].
///
/// # Examples
///
/// ```
/// use mapkit_mapper::json::{self, JsonOptions};
/// use mapkit_mapper::value::{Value, ValueMap};
///
/// let map = ValueMap::from_iter([("a", Value::Int(1))]);
///
/// assert_eq!(json::encode(&map, &JsonOptions::compact()).unwrap(), r#"{"a":1}"#);
/// assert_eq!(json::encode(&map, &JsonOptions::pretty()).unwrap(), "{\n  \"a\": 1\n}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonOptions {
    /// Indentation per level; `None` writes everything on one line.
    pub indent: Option<&'static str>,
}

impl JsonOptions {
    #[inline]
    pub const fn compact() -> Self {
        Self { indent: None }
    }

    #[inline]
    pub const fn pretty() -> Self {
        Self { indent: Some("  ") }
    }

    #[inline]
    pub const fn with_indent(mut self, indent: &'static str) -> Self {
        self.indent = Some(indent);
        self
    }
}

// -----------------------------------------------------------------------------
// Codec

fn write_with<F: Formatter>(map: &ValueMap<'_>, formatter: F) -> Result<String, MapError> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    map.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Encodes a key-value structure as JSON text.
///
/// Objects that were left unexpanded encode as their
/// [`shallow_map`](crate::value::ObjectRef::shallow_map), without nulls.
pub fn encode(map: &ValueMap<'_>, options: &JsonOptions) -> Result<String, MapError> {
    match options.indent {
        None => write_with(map, CompactFormatter),
        Some(indent) => write_with(map, PrettyFormatter::with_indent(indent.as_bytes())),
    }
}

/// Decodes JSON text. The top level may be any JSON value.
pub fn decode(text: &str) -> Result<Value<'static>, MapError> {
    Ok(serde_json::from_str(text)?)
}

/// Decodes JSON text whose top level must be an object.
pub fn decode_map(text: &str) -> Result<ValueMap<'static>, MapError> {
    match decode(text)? {
        Value::Map(map) => Ok(map),
        other => Err(MapError::NotAMap(other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonOptions, decode, decode_map, encode};
    use crate::derive::Mappable;
    use crate::value::{ObjectRef, Value, ValueKind, ValueMap};
    use crate::{MapError, Mappable};
    use alloc::boxed::Box;
    use alloc::string::String;

    #[derive(Mappable, Default, Clone, Debug, PartialEq)]
    struct Link {
        pub label: String,
        pub next: Option<Box<Link>>,
    }

    fn links(len: usize) -> Link {
        let tail = (1..len).rev().fold(None, |next, i| {
            Some(Box::new(Link {
                label: alloc::format!("n{i}"),
                next,
            }))
        });
        Link {
            label: String::from("n0"),
            next: tail,
        }
    }

    #[derive(Mappable, Default, Clone)]
    struct Pet {
        pub name: String,
        pub legs: u8,
        pub owner: Option<String>,
    }

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct PlainPet {
        name: String,
        legs: u8,
    }

    #[test]
    fn custom_indent() {
        let map = ValueMap::from_iter([("a", Value::List([Value::Int(1)].into()))]);
        let text = encode(&map, &JsonOptions::compact().with_indent("\t")).unwrap();
        assert_eq!(text, "{\n\t\"a\": [\n\t\t1\n\t]\n}");
    }

    #[test]
    fn decode_any_and_maps_only() {
        assert_eq!(decode("[1, null]").unwrap(), Value::List([Value::Int(1), Value::Null].into()));
        assert!(matches!(decode_map("[1]"), Err(MapError::NotAMap(ValueKind::List))));
        assert!(matches!(decode_map("{"), Err(MapError::Json(_))));
        assert_eq!(decode_map("{}").unwrap(), ValueMap::new());
    }

    #[test]
    fn readable_by_plain_serde_types() {
        let pet = Pet {
            name: String::from("Rex"),
            legs: 4,
            owner: None,
        };
        let text = pet.to_json(false, &JsonOptions::pretty()).unwrap();
        let plain: PlainPet = serde_json::from_str(&text).unwrap();

        assert_eq!(
            plain,
            PlainPet {
                name: String::from("Rex"),
                legs: 4,
            }
        );
    }

    #[test]
    fn objects_past_the_budget_keep_their_fields() {
        // the default budget of 3 expands n1..n3; n4 is written shallow
        let head = links(5);
        let text = head.to_json(false, &JsonOptions::compact()).unwrap();
        assert_eq!(
            text,
            r#"{"label":"n0","next":{"label":"n1","next":{"label":"n2","next":{"label":"n3","next":{"label":"n4"}}}}}"#
        );
        assert_eq!(Link::from_json(&text).unwrap(), head);

        // objects nested in a shallow view are written as null
        let text = links(6).to_json(true, &JsonOptions::compact()).unwrap();
        assert!(text.ends_with(r#""next":{"label":"n4","next":null}}}}}"#), "{text}");
    }

    #[test]
    fn raw_objects_encode_shallow() {
        let head = links(3);
        let map = ValueMap::from_iter([("head", Value::Object(ObjectRef::Borrowed(&head)))]);
        let text = encode(&map, &JsonOptions::compact()).unwrap();

        // `next` is an object inside the shallow view, so it is dropped as null
        assert_eq!(text, r#"{"head":{"label":"n0"}}"#);
    }
}
