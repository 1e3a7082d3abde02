#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `mapkit_mapper` in doc testing.
// But `macro_utils::Manifest` can only choose one, so we must have an
// `extern self` to ensure `mapkit_mapper` can be used as an alias for `crate`.
extern crate self as mapkit_mapper;

// -----------------------------------------------------------------------------
// no_std support

// Descriptor tables live in `std::sync::OnceLock`.
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod mapping;
mod options;

pub mod info;
pub mod json;
pub mod naming;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::MapError;
pub use mapkit_mapper_derive as derive;
pub use mapping::{MapObject, Mappable};
pub use options::{DEFAULT_MAX_NESTING, MapOptions};
