//! Physical constants for the Regnault engine.
//!
//! The constants are exposed on two surfaces:
//!
//! - [`consts`] holds them as `const` items (`consts::f64::SPEED_OF_LIGHT`),
//!   so a mistyped name is rejected at compile time. This is the surface
//!   engine code should use.
//! - [`table`] holds the same values as a static table addressable by
//!   symbolic name, for name-driven consumers such as configuration files.
//!   Looking up a name outside the fixed set fails with [`UnknownConstant`].
//!
//! All values are immutable for the lifetime of the process and may be read
//! from any number of threads without coordination.

pub mod consts;
pub mod table;

use thiserror::Error;

pub use table::{Category, PhysicalConstant};

pub type Result<T> = std::result::Result<T, UnknownConstant>;

/// Error returned when a name outside the fixed constant set is requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown constant {name}")]
pub struct UnknownConstant {
    pub name: String,
}
