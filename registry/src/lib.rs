//! Corral Registry
//!
//! The derivation interface for constrained containers. A `ContainerDef`
//! fixes, at definition time, which element kinds instances of that
//! container permit; definitions are collected through a `RegistryBuilder`
//! into an immutable `Registry` consulted at every instance construction.
//!
//! This crate also hosts the `CompatRegistry`, the explicit registration
//! table through which foreign sequence types are recognized as compatible
//! without implementing the `Constrained` contract.

mod builder;
mod compat;
mod registry;
mod types;

pub use builder::*;
pub use compat::*;
pub use registry::*;
pub use types::*;
