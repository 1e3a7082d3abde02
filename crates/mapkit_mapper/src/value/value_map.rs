use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use mapkit_utils::hash::{HashMap, new_map};

use crate::value::Value;

// -----------------------------------------------------------------------------
// ValueMap

/// An ordered, string-keyed map of [`Value`]s.
///
/// Iteration follows insertion order. Inserting an existing key replaces
/// its value in place, keeping the original position.
///
/// # Examples
///
/// ```
/// use mapkit_mapper::value::{Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert("name", Value::from("Ann"));
/// map.insert("age", Value::from(30));
/// map.insert("name", Value::from("Bea"));
///
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, ["name", "age"]);
/// assert_eq!(map.get("name").and_then(Value::as_str), Some("Bea"));
/// ```
#[derive(Clone, Default)]
pub struct ValueMap<'a> {
    entries: Vec<(Cow<'static, str>, Value<'a>)>,
    indices: HashMap<Cow<'static, str>, usize>,
}

impl<'a> ValueMap<'a> {
    /// Creates an empty `ValueMap`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            indices: new_map(),
        }
    }

    /// Creates an empty `ValueMap` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a value, returning the previous one under the same key.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: Value<'a>,
    ) -> Option<Value<'a>> {
        let key: Cow<'static, str> = key.into();
        if let Some(&index) = self.indices.get(&*key) {
            Some(core::mem::replace(&mut self.entries[index].1, value))
        } else {
            self.indices.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
            None
        }
    }

    /// Removes a key, shifting later entries forward to keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value<'a>> {
        let index = self.indices.remove(key)?;
        let (_, value) = self.entries.remove(index);
        for slot in self.indices.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(value)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        let index = *self.indices.get(key)?;
        Some(&self.entries[index].1)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value<'a>> {
        let index = *self.indices.get(key)?;
        Some(&mut self.entries[index].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.indices.contains_key(key)
    }

    /// Returns the position of `key` in insertion order.
    #[inline]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.indices.get(key).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value<'a>)> {
        self.entries.iter().map(|(k, v)| (&**k, v))
    }

    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(k, _)| &**k)
    }

    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value<'a>> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// See [`Value::reborrow`].
    pub fn reborrow(&self) -> ValueMap<'_> {
        ValueMap {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.reborrow()))
                .collect(),
            indices: self.indices.clone(),
        }
    }

    /// See [`Value::into_owned`].
    pub fn into_owned(self) -> ValueMap<'static> {
        ValueMap {
            entries: self
                .entries
                .into_iter()
                .map(|(k, v)| (k, v.into_owned()))
                .collect(),
            indices: self.indices,
        }
    }
}

impl PartialEq for ValueMap<'_> {
    /// Order-sensitive comparison.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for ValueMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K: Into<Cow<'static, str>>> FromIterator<(K, Value<'a>)> for ValueMap<'a> {
    fn from_iter<I: IntoIterator<Item = (K, Value<'a>)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = ValueMap::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a, K: Into<Cow<'static, str>>> Extend<(K, Value<'a>)> for ValueMap<'a> {
    fn extend<I: IntoIterator<Item = (K, Value<'a>)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for ValueMap<'a> {
    type Item = (Cow<'static, str>, Value<'a>);
    type IntoIter = alloc::vec::IntoIter<(Cow<'static, str>, Value<'a>)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ValueMap;
    use crate::value::Value;
    use alloc::vec::Vec;

    #[test]
    fn remove_keeps_order() {
        let mut map: ValueMap = ["a", "b", "c", "d"]
            .into_iter()
            .zip(0..)
            .map(|(k, i)| (k, Value::from(i)))
            .collect();

        assert_eq!(map.remove("b"), Some(Value::Int(1)));
        assert_eq!(map.remove("b"), None);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "c", "d"]);
        assert_eq!(map.index_of("d"), Some(2));

        map.insert("b", Value::Null);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "c", "d", "b"]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab = ValueMap::from_iter([("a", Value::Int(1)), ("b", Value::Int(2))]);
        let ba = ValueMap::from_iter([("b", Value::Int(2)), ("a", Value::Int(1))]);

        assert_ne!(ab, ba);
        assert_eq!(ab, ab.reborrow());
    }
}
