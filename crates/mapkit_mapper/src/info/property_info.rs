use core::fmt;

use crate::MapError;
use crate::value::Value;

// -----------------------------------------------------------------------------
// Visibility & Storage

/// Whether a member may be reached from outside the type.
///
/// Only public members take part in accessor lookup and direct writes;
/// private fields are still read by `to_map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Whether a member belongs to each instance or is shared by the type.
///
/// Shared members are listed by [`TypeInfo::properties`] but never mapped.
///
/// [`TypeInfo::properties`]: crate::info::TypeInfo::properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Storage {
    #[default]
    Instance,
    Shared,
}

// -----------------------------------------------------------------------------
// PropertyInfo

/// Descriptor of one data member of `T`.
pub struct PropertyInfo<T: 'static> {
    name: &'static str,
    type_name: &'static str,
    visibility: Visibility,
    storage: Storage,
    read: fn(&T) -> Value<'_>,
    write: fn(&mut T, Value<'_>) -> Result<(), MapError>,
}

impl<T: 'static> PropertyInfo<T> {
    /// Creates a public instance property.
    pub const fn new(
        name: &'static str,
        type_name: &'static str,
        read: fn(&T) -> Value<'_>,
        write: fn(&mut T, Value<'_>) -> Result<(), MapError>,
    ) -> Self {
        Self {
            name,
            type_name,
            visibility: Visibility::Public,
            storage: Storage::Instance,
            read,
            write,
        }
    }

    #[inline]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[inline]
    pub const fn with_storage(mut self, storage: Storage) -> Self {
        self.storage = storage;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared type, as written in the source.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn storage(&self) -> Storage {
        self.storage
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    #[inline]
    pub const fn is_shared(&self) -> bool {
        matches!(self.storage, Storage::Shared)
    }

    /// Whether a value can be assigned to this member directly.
    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.is_public() && !self.is_shared()
    }

    /// Reads the raw field, ignoring any getter.
    #[inline]
    pub fn read<'a>(&self, this: &'a T) -> Value<'a> {
        (self.read)(this)
    }

    /// Writes the raw field, ignoring visibility and any setter.
    #[inline]
    pub fn write(&self, this: &mut T, value: Value<'_>) -> Result<(), MapError> {
        (self.write)(this, value)
    }
}

impl<T: 'static> fmt::Debug for PropertyInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("visibility", &self.visibility)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
