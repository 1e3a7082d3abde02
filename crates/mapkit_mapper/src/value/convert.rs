use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::MapError;
use crate::mapping::MapObject;
use crate::value::{Value, ValueMap};

// -----------------------------------------------------------------------------
// Traits

/// Builds a boxed mappable object from a key-value structure.
///
/// Exposed by [`FromValue::map_factory`] for types that implement
/// [`Mappable`](crate::Mappable), so a setter taking such a type can receive
/// a nested map.
pub type MapFactory = fn(ValueMap<'_>) -> Result<Box<dyn MapObject>, MapError>;

/// Reads a value out of a field without copying it where possible.
///
/// Strings are borrowed, mappable types become a borrowed
/// [`Value::Object`], and containers are converted element by element.
pub trait ToValue {
    fn to_value(&self) -> Value<'_>;
}

/// Converts the return value of a getter.
///
/// Implemented for every `&T` where `T: ToValue`, and for the common owned
/// types, so a getter may return either a reference into `self` or a freshly
/// built value.
pub trait IntoValue<'a> {
    fn into_value(self) -> Value<'a>;
}

/// Converts a [`Value`] into a setter parameter or a field.
///
/// # Examples
///
/// ```
/// use mapkit_mapper::value::{FromValue, Value};
///
/// assert_eq!(u8::from_value(Value::Int(200)).unwrap(), 200);
/// assert!(u8::from_value(Value::Int(300)).is_err());
/// assert_eq!(Option::<String>::from_value(Value::Null).unwrap(), None);
/// ```
pub trait FromValue: Sized {
    fn from_value(value: Value<'_>) -> Result<Self, MapError>;

    /// The `from_map` factory of this type, when it is mappable.
    ///
    /// Wrappers such as `Option<T>` and `Box<T>` forward the factory of `T`.
    #[inline]
    fn map_factory() -> Option<MapFactory> {
        None
    }
}

impl<'a, T: ToValue + ?Sized> IntoValue<'a> for &'a T {
    #[inline]
    fn into_value(self) -> Value<'a> {
        self.to_value()
    }
}

// -----------------------------------------------------------------------------
// Scalars

macro_rules! impl_scalar {
    ($($ty:ty),*) => {$(
        impl ToValue for $ty {
            #[inline]
            fn to_value(&self) -> Value<'_> {
                Value::from(*self)
            }
        }

        impl<'a> IntoValue<'a> for $ty {
            #[inline]
            fn into_value(self) -> Value<'a> {
                Value::from(self)
            }
        }
    )*};
}

impl_scalar!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);

// Integers from any numeric value, as long as the number is integral and
// fits the target.
fn integral(value: &Value<'_>, target: &'static str) -> Result<i128, MapError> {
    match *value {
        Value::Int(i) => Ok(i128::from(i)),
        Value::UInt(u) => Ok(i128::from(u)),
        Value::Float(f) if f.is_finite() && (f as i128) as f64 == f => Ok(f as i128),
        Value::Float(f) if f.is_finite() && f.abs() >= 1e38 => Err(MapError::out_of_range(target, f)),
        ref other => Err(MapError::mismatch(target, other.kind())),
    }
}

macro_rules! impl_from_integer {
    ($($ty:ident),*) => {$(
        impl FromValue for $ty {
            fn from_value(value: Value<'_>) -> Result<Self, MapError> {
                let n = integral(&value, stringify!($ty))?;
                <$ty>::try_from(n).map_err(|_| MapError::out_of_range(stringify!($ty), n))
            }
        }
    )*};
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromValue for bool {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(MapError::mismatch("bool", other.kind())),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        value
            .as_f64()
            .ok_or_else(|| MapError::mismatch("f64", value.kind()))
    }
}

impl FromValue for f32 {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        value
            .as_f64()
            .map(|f| f as f32)
            .ok_or_else(|| MapError::mismatch("f32", value.kind()))
    }
}

impl ToValue for char {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Owned(self.to_string()))
    }
}

impl<'a> IntoValue<'a> for char {
    #[inline]
    fn into_value(self) -> Value<'a> {
        Value::String(Cow::Owned(self.to_string()))
    }
}

impl FromValue for char {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        if let Value::String(s) = &value {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(c);
            }
            return Err(MapError::out_of_range("char", s));
        }
        Err(MapError::mismatch("char", value.kind()))
    }
}

// -----------------------------------------------------------------------------
// Strings

impl ToValue for str {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self))
    }
}

impl ToValue for String {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self))
    }
}

impl<'a> IntoValue<'a> for String {
    #[inline]
    fn into_value(self) -> Value<'a> {
        Value::String(Cow::Owned(self))
    }
}

impl<'a> IntoValue<'a> for Cow<'a, str> {
    #[inline]
    fn into_value(self) -> Value<'a> {
        Value::String(self)
    }
}

impl FromValue for String {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        match value {
            Value::String(s) => Ok(s.into_owned()),
            other => Err(MapError::mismatch("string", other.kind())),
        }
    }
}

// -----------------------------------------------------------------------------
// Wrappers

impl<T: ToValue> ToValue for Option<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<'a, T: IntoValue<'a>> IntoValue<'a> for Option<T> {
    #[inline]
    fn into_value(self) -> Value<'a> {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }

    #[inline]
    fn map_factory() -> Option<MapFactory> {
        T::map_factory()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<'a, T: IntoValue<'a>> IntoValue<'a> for Box<T> {
    #[inline]
    fn into_value(self) -> Value<'a> {
        (*self).into_value()
    }
}

impl<T: FromValue> FromValue for Box<T> {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        T::from_value(value).map(Box::new)
    }

    #[inline]
    fn map_factory() -> Option<MapFactory> {
        T::map_factory()
    }
}

// -----------------------------------------------------------------------------
// Containers

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<'a, T: IntoValue<'a>> IntoValue<'a> for Vec<T> {
    fn into_value(self) -> Value<'a> {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(MapError::mismatch("list", other.kind())),
        }
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

impl<'a, T: IntoValue<'a>> IntoValue<'a> for BTreeMap<String, T> {
    fn into_value(self) -> Value<'a> {
        Value::Map(
            self.into_iter()
                .map(|(key, value)| (key, value.into_value()))
                .collect(),
        )
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        match value {
            Value::Map(map) => map
                .into_iter()
                .map(|(key, value)| T::from_value(value).map(|value| (key.into_owned(), value)))
                .collect(),
            other => Err(MapError::mismatch("map", other.kind())),
        }
    }
}

// -----------------------------------------------------------------------------
// Values

impl ToValue for Value<'_> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        self.reborrow()
    }
}

impl<'a> IntoValue<'a> for Value<'a> {
    #[inline]
    fn into_value(self) -> Value<'a> {
        self
    }
}

impl FromValue for Value<'static> {
    #[inline]
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        Ok(value.into_owned())
    }
}

impl ToValue for ValueMap<'_> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Map(self.reborrow())
    }
}

impl<'a> IntoValue<'a> for ValueMap<'a> {
    #[inline]
    fn into_value(self) -> Value<'a> {
        Value::Map(self)
    }
}

impl FromValue for ValueMap<'static> {
    fn from_value(value: Value<'_>) -> Result<Self, MapError> {
        match value {
            Value::Map(map) => Ok(map.into_owned()),
            other => Err(MapError::mismatch("map", other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FromValue, IntoValue, ToValue};
    use crate::MapError;
    use crate::value::{Value, ValueMap};
    use alloc::borrow::Cow;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn integer_narrowing() {
        assert_eq!(i8::from_value(Value::Int(-128)).unwrap(), -128);
        assert_eq!(u64::from_value(Value::UInt(u64::MAX)).unwrap(), u64::MAX);
        assert_eq!(u32::from_value(Value::Float(30.0)).unwrap(), 30);

        assert!(matches!(
            u32::from_value(Value::Int(-1)),
            Err(MapError::OutOfRange { target: "u32", .. })
        ));
        assert!(matches!(
            i32::from_value(Value::Float(1.5)),
            Err(MapError::Mismatch { expected: "i32", .. })
        ));
        assert!(matches!(
            i64::from_value(Value::from("1")),
            Err(MapError::Mismatch { .. })
        ));
    }

    #[test]
    fn strings_are_borrowed_when_read() {
        let name = String::from("Ann");
        match name.to_value() {
            Value::String(Cow::Borrowed(s)) => assert!(core::ptr::eq(s, name.as_str())),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(String::from("Bo").into_value(), Value::from("Bo"));
        assert_eq!(char::from_value(Value::from("x")).unwrap(), 'x');
        assert!(char::from_value(Value::from("xy")).is_err());
    }

    #[test]
    fn containers() {
        let tags = vec![Some(1_u8), None];
        assert_eq!(tags.to_value(), Value::List(vec![Value::Int(1), Value::Null]));

        let decoded: Vec<Option<u8>> = FromValue::from_value(tags.to_value()).unwrap();
        assert_eq!(decoded, tags);

        let mut scores = BTreeMap::new();
        scores.insert(String::from("a"), 1.5_f64);
        let value = (&scores).into_value();
        assert_eq!(
            value,
            Value::Map(ValueMap::from_iter([("a", Value::Float(1.5))]))
        );
        assert_eq!(BTreeMap::<String, f64>::from_value(value).unwrap(), scores);
    }

    #[test]
    fn plain_types_have_no_factory() {
        assert!(String::map_factory().is_none());
        assert!(Option::<Vec<u8>>::map_factory().is_none());
    }
}
