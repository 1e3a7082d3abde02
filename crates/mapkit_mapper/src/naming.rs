//! Property names to accessor names.
//!
//! Accessors are looked up as `{prefix}{Fragment}`, where the fragment is
//! the property name in PascalCase: `first_name` is read through
//! `getFirstName` and written through `setFirstName`.
//!
//! `#[derive(Mappable)]` registers accessor methods with the same
//! transform, so the names it records always match the lookups here.

pub use mapkit_utils::naming::{READ_PREFIXES, WRITE_PREFIX, accessor_name, to_accessor_name};
