/// Nesting budget used when none is given.
pub const DEFAULT_MAX_NESTING: usize = 3;

/// Knobs of the read path.
///
/// # Examples
///
/// ```
/// use mapkit_mapper::MapOptions;
///
/// let options = MapOptions::new().include_null(true).max_nesting(1);
/// assert!(options.include_null);
/// assert_eq!(options.max_nesting, 1);
/// assert_eq!(MapOptions::default().max_nesting, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    /// Keep properties whose value is null.
    pub include_null: bool,
    /// How many levels of nested objects are expanded into maps.
    pub max_nesting: usize,
}

impl MapOptions {
    #[inline]
    pub const fn new() -> Self {
        Self {
            include_null: false,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    #[inline]
    pub const fn include_null(mut self, include_null: bool) -> Self {
        self.include_null = include_null;
        self
    }

    #[inline]
    pub const fn max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}

impl Default for MapOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
