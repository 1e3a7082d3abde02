//! Per-type descriptor tables.
//!
//! - [`TypeInfo`]: everything the mapper knows about a type: its name,
//!   its properties in declaration order, its accessor methods, and which
//!   accessor serves each property.
//! - [`PropertyInfo`]: one data member, with raw read and write functions.
//! - [`MethodInfo`]: one accessor method, a getter or a one-argument setter.
//! - [`ParamInfo`]: the parameter of a setter.
//! - [`TypeInfoCell`]: static storage for a [`TypeInfo`].
//!
//! Tables are usually generated by [`#[derive(Mappable)]`](crate::derive::Mappable),
//! but every constructor is public so a table can be written by hand.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod method_info;
mod property_info;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use cell::TypeInfoCell;
pub use method_info::{MethodInfo, MethodKind, ParamInfo};
pub use property_info::{PropertyInfo, Storage, Visibility};
pub use type_info::TypeInfo;
