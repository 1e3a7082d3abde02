//! The key-value structure sitting between objects and text.
//!
//! - [`Value`]: one node of the structure.
//! - [`ValueMap`]: an ordered string-keyed map of values.
//! - [`ObjectRef`]: a mappable object that has not been expanded into a map.
//! - [`ToValue`], [`IntoValue`], [`FromValue`]: conversions between Rust
//!   types and [`Value`].
//!
//! Values borrow from the object they were read from (`Value<'a>`);
//! anything decoded from text is `Value<'static>`.

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod object_ref;
mod serde;
mod value_map;

// -----------------------------------------------------------------------------
// Exports

pub use convert::{FromValue, IntoValue, MapFactory, ToValue};
pub use object_ref::ObjectRef;
pub use value_map::ValueMap;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

// -----------------------------------------------------------------------------
// ValueKind

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    String,
    List,
    Map,
    Object,
}

impl ValueKind {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Value

/// One node of the key-value structure.
///
/// Integers are stored as [`Value::Int`] whenever they fit in an `i64`;
/// [`Value::UInt`] only holds values above `i64::MAX`.
///
/// [`Value::Object`] holds a mappable object that was not expanded, either
/// because the nesting budget ran out or because it is the very object
/// being mapped.
///
/// # Examples
///
/// ```
/// use mapkit_mapper::value::{Value, ValueKind};
///
/// assert_eq!(Value::from(30_u8), Value::Int(30));
/// assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
/// assert_eq!(Value::from("Ann").kind(), ValueKind::String);
/// assert!(Value::from(None::<bool>).is_null());
/// ```
#[derive(Clone, Default)]
pub enum Value<'a> {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(Cow<'a, str>),
    List(Vec<Value<'a>>),
    Map(ValueMap<'a>),
    Object(ObjectRef<'a>),
}

impl<'a> Value<'a> {
    /// Returns the [`ValueKind`] of this value.
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::UInt(_) => ValueKind::UInt,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
            Self::Object(_) => ValueKind::Object,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer that fits.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::UInt(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            Self::UInt(u) => Some(*u as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_map(&self) -> Option<&ValueMap<'a>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_object(&self) -> Option<&ObjectRef<'a>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Borrow this value again with a shorter lifetime, without cloning
    /// strings or owned objects.
    pub fn reborrow(&self) -> Value<'_> {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::Int(*i),
            Self::UInt(u) => Value::UInt(*u),
            Self::Float(f) => Value::Float(*f),
            Self::String(s) => Value::String(Cow::Borrowed(s)),
            Self::List(items) => Value::List(items.iter().map(Value::reborrow).collect()),
            Self::Map(map) => Value::Map(map.reborrow()),
            Self::Object(object) => Value::Object(object.reborrow()),
        }
    }

    /// Detach this value from the object it was read from.
    ///
    /// Borrowed strings are copied and borrowed objects are cloned.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(b),
            Self::Int(i) => Value::Int(i),
            Self::UInt(u) => Value::UInt(u),
            Self::Float(f) => Value::Float(f),
            Self::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Self::List(items) => Value::List(items.into_iter().map(Value::into_owned).collect()),
            Self::Map(map) => Value::Map(map.into_owned()),
            Self::Object(object) => Value::Object(object.into_owned()),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Map(map) => fmt::Debug::fmt(map, f),
            Self::Object(object) => fmt::Debug::fmt(object, f),
        }
    }
}

impl PartialEq for Value<'_> {
    /// Structural equality; objects are equal only when they are the same
    /// instance.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.is_same_instance(b),
            _ => false,
        }
    }
}

// -----------------------------------------------------------------------------
// From impls

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value<'_> {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::Int(value as i64)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value<'_> {
            #[inline]
            fn from(value: $ty) -> Self {
                match i64::try_from(value) {
                    Ok(i) => Self::Int(i),
                    Err(_) => Self::UInt(value as u64),
                }
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Value<'_> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value<'_> {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<f64> for Value<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::String(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        Self::String(value)
    }
}

impl<'a> From<ValueMap<'a>> for Value<'a> {
    #[inline]
    fn from(value: ValueMap<'a>) -> Self {
        Self::Map(value)
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    #[inline]
    fn from(value: Vec<Value<'a>>) -> Self {
        Self::List(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Value, ValueKind, ValueMap};
    use alloc::borrow::Cow;
    use alloc::string::{String, ToString};
    use alloc::vec;

    #[test]
    fn integers_prefer_signed() {
        assert_eq!(Value::from(7_u32), Value::Int(7));
        assert_eq!(Value::from(-7_i8), Value::Int(-7));
        assert_eq!(Value::from(i64::MAX as u64 + 1), Value::UInt(i64::MAX as u64 + 1));
        assert_eq!(Value::UInt(5).as_i64(), Some(5));
    }

    #[test]
    fn into_owned_copies_borrowed_strings() {
        let text = String::from("borrowed");
        let value = Value::List(vec![Value::from(text.as_str()), Value::Null]);
        let owned: Value<'static> = value.into_owned();
        drop(text);

        match owned.as_list() {
            Some([Value::String(Cow::Owned(s)), Value::Null]) => assert_eq!(s, "borrowed"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn kinds_and_accessors() {
        let map = ValueMap::from_iter([("a", Value::from(true))]);
        let value = Value::from(map);

        assert_eq!(value.kind(), ValueKind::Map);
        assert_eq!(value.kind().to_string(), "map");
        assert_eq!(value.as_map().and_then(|m| m.get("a")).and_then(Value::as_bool), Some(true));
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(3.5).as_i64(), None);
    }
}
