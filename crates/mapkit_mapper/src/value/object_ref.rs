use alloc::boxed::Box;
use core::any::Any;
use core::{fmt, ptr};

use crate::mapping::{MapObject, Mappable};
use crate::value::{Value, ValueMap};

/// A mappable object stored in a [`Value`](crate::value::Value) without
/// being expanded.
///
/// Fields read from an object are [`Borrowed`](ObjectRef::Borrowed); values
/// returned by getters, or produced by a `from_map` factory, are
/// [`Owned`](ObjectRef::Owned).
pub enum ObjectRef<'a> {
    Borrowed(&'a dyn MapObject),
    Owned(Box<dyn MapObject>),
}

impl<'a> ObjectRef<'a> {
    #[inline]
    pub fn get(&self) -> &dyn MapObject {
        match self {
            Self::Borrowed(object) => *object,
            Self::Owned(object) => &**object,
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.get().object_type_name()
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.get().as_any().is::<T>()
    }

    /// Whether this is `target` itself: same type at the same address.
    ///
    /// Owned objects are never an existing instance.
    #[inline]
    pub fn is_instance_of<T: Any>(&self, target: &T) -> bool {
        match self {
            Self::Borrowed(object) => {
                object.as_any().is::<T>()
                    && ptr::addr_eq(*object as *const dyn MapObject, target as *const T)
            }
            Self::Owned(_) => false,
        }
    }

    /// Whether both refer to the same live instance.
    pub fn is_same_instance(&self, other: &ObjectRef<'_>) -> bool {
        let (a, b) = (self.get(), other.get());
        a.as_any().type_id() == b.as_any().type_id()
            && ptr::addr_eq(a as *const dyn MapObject, b as *const dyn MapObject)
    }

    #[inline]
    pub fn reborrow(&self) -> ObjectRef<'_> {
        ObjectRef::Borrowed(self.get())
    }

    /// Detach from the source object, cloning a borrowed instance.
    pub fn into_owned(self) -> ObjectRef<'static> {
        match self {
            Self::Borrowed(object) => ObjectRef::Owned(object.clone_object()),
            Self::Owned(object) => ObjectRef::Owned(object),
        }
    }

    /// Expand into a key-value structure with the remaining budget.
    pub fn into_map(self, include_null: bool, max_nesting: usize) -> ValueMap<'a> {
        match self {
            Self::Borrowed(object) => object.map_object(include_null, max_nesting),
            Self::Owned(object) => object.into_map_object(include_null, max_nesting),
        }
    }

    /// A one-level view of the object: its own properties, with every
    /// object nested inside them replaced by null.
    ///
    /// This is how an object left unexpanded is written out as text.
    pub fn shallow_map(&self, include_null: bool) -> ValueMap<'_> {
        self.get()
            .map_object(include_null, 0)
            .into_iter()
            .map(|(key, value)| (key, without_objects(value)))
            .filter(|(_, value)| include_null || !value.is_null())
            .collect()
    }

    /// Take the object out as `T`, cloning it if borrowed.
    ///
    /// Returns `None` if the object is of another type.
    pub fn downcast<T: Mappable>(self) -> Option<T> {
        match self {
            Self::Borrowed(object) => object.as_any().downcast_ref::<T>().cloned(),
            Self::Owned(object) => object.into_any().downcast::<T>().ok().map(|value| *value),
        }
    }
}

fn without_objects(value: Value<'_>) -> Value<'_> {
    match value {
        Value::Object(_) => Value::Null,
        Value::List(items) => Value::List(items.into_iter().map(without_objects).collect()),
        Value::Map(map) => Value::Map(
            map.into_iter()
                .map(|(key, item)| (key, without_objects(item)))
                .collect(),
        ),
        other => other,
    }
}

impl Clone for ObjectRef<'_> {
    fn clone(&self) -> Self {
        match self {
            Self::Borrowed(object) => Self::Borrowed(*object),
            Self::Owned(object) => Self::Owned(object.clone_object()),
        }
    }
}

impl fmt::Debug for ObjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self.type_name())
    }
}
