//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// # Examples
///
/// ```
/// use mapkit_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, usize> = HashMap::default();
/// map.insert("name", 0);
///
/// assert_eq!(map.get("name"), Some(&0));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// Creates an empty [`HashMap`] in const context.
///
/// # Examples
///
/// ```
/// use mapkit_utils::hash::{HashMap, new_map};
///
/// static EMPTY: HashMap<&str, u32> = new_map();
/// assert!(EMPTY.is_empty());
/// ```
#[inline]
pub const fn new_map<K, V>() -> HashMap<K, V> {
    hashbrown::HashMap::with_hasher(FixedHashState)
}

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
