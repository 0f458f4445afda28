//! Corral Core Types
//!
//! This crate provides the foundational types used throughout the corral
//! workspace:
//! - `Kind` — runtime type identifiers for container elements
//! - `KindSet` — the allowed-kind set attached to container definitions and
//!   instances
//! - `Value` — the dynamic element values stored in constrained containers

mod kind;
mod value;

pub use kind::*;
pub use value::*;
