use alloc::boxed::Box;
use alloc::string::{FromUtf8Error, String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;

use thiserror::Error;

use crate::value::ValueKind;

// -----------------------------------------------------------------------------
// Error

/// Errors raised while moving values between objects, maps and JSON text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// No public one-argument setter and no public field can receive the key.
    ///
    /// `from_map` reports every offending key at once, in input order.
    #[error("`{type_name}` has no public setter or field for `{}`", .properties.join("`, `"))]
    NotWritable {
        type_name: &'static str,
        properties: Vec<String>,
    },

    /// A setter or field was found, but the value could not be converted.
    #[error("cannot write `{type_name}.{property}`: {source}")]
    Property {
        type_name: &'static str,
        property: String,
        #[source]
        source: Box<MapError>,
    },

    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: ValueKind,
    },

    #[error("value {value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: String },

    /// Decoded text was valid, but its top level is not a map.
    #[error("expected a map at the top level, found {0}")]
    NotAMap(ValueKind),

    #[error("JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The codec produced bytes that are not UTF-8.
    #[error("encoded text is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl MapError {
    #[cold]
    pub(crate) fn not_writable(type_name: &'static str, property: &str) -> Self {
        Self::NotWritable {
            type_name,
            properties: Vec::from([property.to_string()]),
        }
    }

    #[cold]
    pub(crate) fn mismatch(expected: &'static str, found: ValueKind) -> Self {
        Self::Mismatch { expected, found }
    }

    #[cold]
    pub(crate) fn out_of_range(target: &'static str, value: impl Display) -> Self {
        Self::OutOfRange {
            target,
            value: value.to_string(),
        }
    }

    /// Attach the property that failed to convert.
    #[cold]
    pub(crate) fn in_property(self, type_name: &'static str, property: &str) -> Self {
        Self::Property {
            type_name,
            property: property.to_string(),
            source: Box::new(self),
        }
    }

    /// Returns the property names this error is about, outermost first.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit_mapper::{Mappable, derive::Mappable, value::{Value, ValueMap}};
    ///
    /// #[derive(Mappable, Default, Clone, Debug)]
    /// struct Point {
    ///     pub x: i32,
    /// }
    ///
    /// let input = ValueMap::from_iter([("x", Value::from(1)), ("y", Value::from(2)), ("z", Value::from(3))]);
    /// let err = Point::from_map(input).unwrap_err();
    ///
    /// assert_eq!(err.properties(), ["y", "z"]);
    /// ```
    pub fn properties(&self) -> Vec<&str> {
        match self {
            Self::NotWritable { properties, .. } => properties.iter().map(String::as_str).collect(),
            Self::Property {
                property, source, ..
            } => {
                let mut names = Vec::from([property.as_str()]);
                names.extend(source.properties());
                names
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapError;
    use crate::value::ValueKind;
    use alloc::string::{String, ToString};
    use alloc::vec;

    #[test]
    fn display_lists_every_key() {
        let err = MapError::NotWritable {
            type_name: "Person",
            properties: ["nick".into(), "email".into()].into(),
        };
        assert_eq!(
            err.to_string(),
            "`Person` has no public setter or field for `nick`, `email`"
        );
    }

    #[test]
    fn property_context_wraps_conversion_errors() {
        let err = MapError::mismatch("u32", ValueKind::String).in_property("Person", "age");
        assert_eq!(
            err.to_string(),
            "cannot write `Person.age`: expected u32, found string"
        );
        assert_eq!(err.properties(), ["age"]);

        // nested `from_map` failures keep the path down to the bad key
        let err = MapError::not_writable("Person", "nick").in_property("Team", "lead");
        assert_eq!(err.properties(), ["lead", "nick"]);
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let err = MapError::from(String::from_utf8(vec![0xff]).unwrap_err());
        assert!(matches!(err, MapError::Utf8(_)));
        assert!(err.to_string().starts_with("encoded text is not UTF-8"));
    }
}
