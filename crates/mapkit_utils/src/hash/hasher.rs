//! Provide `FixedHasher`.
//!
//! `FixedHasher` based on `foldhash` crate,
//! Provide stable hash results through a fixed hash seed.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6D61_706B_6974_2D31);

/// A fixed hasher provided hash results that only related on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`] .
///
/// Which can be created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Fixed Hash State based upon a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use mapkit_utils::hash::FixedHashState;
///
/// let hash = |value: &str| {
///     let mut hasher = FixedHashState.build_hasher();
///     value.hash(&mut hasher);
///     hasher.finish()
/// };
///
/// assert_eq!(hash("getName"), hash("getName"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

#[cfg(test)]
mod tests {
    use super::FixedHashState;
    use core::hash::BuildHasher;

    #[test]
    fn stable_across_builders() {
        let a = FixedHashState.hash_one("setAddress");
        let b = FixedHashState.hash_one("setAddress");
        let c = FixedHashState.hash_one("getAddress");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
