//! The [`Mappable`] trait and its object-safe companion [`MapObject`].

// -----------------------------------------------------------------------------
// Modules

mod read;
mod write;

use alloc::boxed::Box;
use alloc::string::String;
use core::any::Any;

use crate::MapError;
use crate::info::TypeInfo;
use crate::json::{self, JsonOptions};
use crate::options::{DEFAULT_MAX_NESTING, MapOptions};
use crate::value::{Value, ValueMap};

// -----------------------------------------------------------------------------
// Mappable

/// A type that converts to and from a [`ValueMap`] through its descriptor
/// table.
///
/// Only [`type_info`](Mappable::type_info) is required; every other method
/// is provided. Usually implemented with
/// [`#[derive(Mappable)]`](crate::derive::Mappable).
///
/// # Examples
///
/// ```
/// use mapkit_mapper::{Mappable, derive::Mappable, json::JsonOptions};
///
/// #[derive(Mappable, Default, Clone, Debug, PartialEq)]
/// struct Person {
///     pub name: String,
///     pub age: u32,
///     pub email: Option<String>,
/// }
///
/// let ann = Person { name: "Ann".into(), age: 30, email: None };
///
/// let text = ann.to_json(false, &JsonOptions::compact()).unwrap();
/// assert_eq!(text, r#"{"name":"Ann","age":30}"#);
///
/// let text = ann.to_json(true, &JsonOptions::compact()).unwrap();
/// assert_eq!(text, r#"{"name":"Ann","age":30,"email":null}"#);
///
/// assert_eq!(Person::from_json(&text).unwrap(), ann);
/// ```
pub trait Mappable: Default + Clone + 'static {
    /// Returns the descriptor table of this type.
    fn type_info() -> &'static TypeInfo<Self>;

    /// Converts every instance property into an ordered map.
    ///
    /// Properties come in declaration order. Null values are left out
    /// unless `include_null` is set. Nested mappable values are expanded
    /// into maps while `max_nesting` is above zero, one level less each
    /// time; past that they stay [`Value::Object`].
    fn to_map(&self, include_null: bool, max_nesting: usize) -> ValueMap<'_> {
        read::to_map(self, include_null, max_nesting)
    }

    /// [`to_map`](Mappable::to_map) with the knobs taken from `options`.
    #[inline]
    fn to_map_with(&self, options: &MapOptions) -> ValueMap<'_> {
        self.to_map(options.include_null, options.max_nesting)
    }

    /// Builds a new instance from `map`.
    ///
    /// Every non-null key must have a target, or nothing is built and a
    /// single [`MapError::NotWritable`] lists all the keys without one.
    /// Null values are skipped and leave the default in place.
    fn from_map(map: ValueMap<'_>) -> Result<Self, MapError> {
        write::from_map(map)
    }

    /// Reads one property the way [`to_map`](Mappable::to_map) does.
    ///
    /// Unknown names read as [`Value::Null`] unless a getter matches.
    fn get_property_value(&self, name: &str, include_null: bool, max_nesting: usize) -> Value<'_> {
        read::get_property_value(self, name, include_null, max_nesting)
    }

    /// Writes one property through its setter or its public field.
    fn set_property_value(&mut self, name: &str, value: Value<'_>) -> Result<(), MapError> {
        write::set_property_value(self, name, value)
    }

    /// Encodes [`to_map`](Mappable::to_map) as JSON, with the default
    /// nesting budget.
    ///
    /// An object the budget leaves unexpanded is written as its own
    /// properties, with the objects nested in it written as null.
    fn to_json(&self, include_null: bool, options: &JsonOptions) -> Result<String, MapError> {
        json::encode(&read::to_text_map(self, include_null, DEFAULT_MAX_NESTING), options)
    }

    /// Decodes JSON text and passes it to [`from_map`](Mappable::from_map).
    ///
    /// The top level of the text must be an object.
    fn from_json(text: &str) -> Result<Self, MapError> {
        Self::from_map(json::decode_map(text)?)
    }
}

// -----------------------------------------------------------------------------
// MapObject

/// Object-safe access to any [`Mappable`] value.
///
/// Implemented for every `Mappable` type; this is what a
/// [`Value::Object`] holds.
pub trait MapObject: Any {
    fn object_type_name(&self) -> &'static str;

    /// See [`Mappable::to_map`].
    fn map_object(&self, include_null: bool, max_nesting: usize) -> ValueMap<'_>;

    /// Like [`map_object`](MapObject::map_object), consuming the object.
    fn into_map_object(self: Box<Self>, include_null: bool, max_nesting: usize) -> ValueMap<'static>;

    fn clone_object(&self) -> Box<dyn MapObject>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Mappable> MapObject for T {
    #[inline]
    fn object_type_name(&self) -> &'static str {
        T::type_info().type_name()
    }

    #[inline]
    fn map_object(&self, include_null: bool, max_nesting: usize) -> ValueMap<'_> {
        self.to_map(include_null, max_nesting)
    }

    fn into_map_object(self: Box<Self>, include_null: bool, max_nesting: usize) -> ValueMap<'static> {
        self.to_map(include_null, max_nesting).into_owned()
    }

    #[inline]
    fn clone_object(&self) -> Box<dyn MapObject> {
        Box::new(self.clone())
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
