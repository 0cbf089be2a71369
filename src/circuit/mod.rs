//! Circuit structure representation and grid construction.
//!
//! This module provides the geometric data model ([`Position`], [`Segment`],
//! [`Circuit`]) and the lattice a circuit is carved from ([`grid`]). The
//! optional [`validate`] pass checks connectivity for callers that want it.

pub mod grid;
mod types;
pub mod validate;

pub use grid::{GridSpec, Orientation};
pub use types::{Circuit, Position, Segment};
pub use validate::is_connected;
