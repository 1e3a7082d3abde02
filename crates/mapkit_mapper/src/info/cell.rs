use std::sync::OnceLock;

use crate::info::TypeInfo;

/// Static storage for the [`TypeInfo`] of one type.
///
/// Internally this is a [`OnceLock`]; the table is built on first access
/// and read-only afterwards.
///
/// # Examples
///
/// ```
/// use mapkit_mapper::Mappable;
/// use mapkit_mapper::info::{PropertyInfo, TypeInfo, TypeInfoCell};
/// use mapkit_mapper::value::{FromValue, ToValue};
///
/// #[derive(Default, Clone)]
/// struct Counter {
///     hits: u32,
/// }
///
/// impl Mappable for Counter {
///     fn type_info() -> &'static TypeInfo<Self> {
///         static CELL: TypeInfoCell<Counter> = TypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::new(
///                 "Counter",
///                 vec![PropertyInfo::new(
///                     "hits",
///                     "u32",
///                     |this: &Counter| this.hits.to_value(),
///                     |this: &mut Counter, value| {
///                         this.hits = FromValue::from_value(value)?;
///                         Ok(())
///                     },
///                 )],
///                 vec![],
///             )
///         })
///     }
/// }
///
/// let map = Counter { hits: 2 }.to_map(false, 3);
/// assert_eq!(map.get("hits").and_then(|v| v.as_i64()), Some(2));
/// ```
pub struct TypeInfoCell<T: 'static>(OnceLock<TypeInfo<T>>);

impl<T: 'static> TypeInfoCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored table, building it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo<T>) -> &TypeInfo<T> {
        self.0.get_or_init(f)
    }
}

impl<T: 'static> Default for TypeInfoCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
