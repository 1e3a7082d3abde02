//! Items used by the code `#[derive(Mappable)]` generates.
//!
//! Not public API.

use alloc::boxed::Box;

use crate::value::{ObjectRef, Value, ValueKind, ValueMap};
use crate::{MapError, MapObject, Mappable};

/// The [`MapFactory`](crate::value::MapFactory) of a mappable type.
pub fn map_factory<T: Mappable>(map: ValueMap<'_>) -> Result<Box<dyn MapObject>, MapError> {
    Ok(Box::new(T::from_map(map)?))
}

/// `FromValue` for a mappable type.
///
/// A map is built through `from_map`; an object of the same type is taken
/// as is, cloned if borrowed.
pub fn from_value<T: Mappable>(value: Value<'_>) -> Result<T, MapError> {
    let expected = T::type_info().type_name();
    match value {
        Value::Map(map) => T::from_map(map),
        Value::Object(object) => object
            .downcast::<T>()
            .ok_or_else(|| MapError::mismatch(expected, ValueKind::Object)),
        other => Err(MapError::mismatch(expected, other.kind())),
    }
}

/// `IntoValue` for a mappable type: the value is moved into an owned object.
#[inline]
pub fn into_object<'a, T: Mappable>(value: T) -> Value<'a> {
    Value::Object(ObjectRef::Owned(Box::new(value)))
}

/// `ToValue` for a mappable type: the value is lent as a borrowed object.
#[inline]
pub fn borrow_object<T: Mappable>(value: &T) -> Value<'_> {
    Value::Object(ObjectRef::Borrowed(value))
}
