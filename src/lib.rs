//! # Circuitgen Core
//!
//! A procedural generator of electrical circuit-diagram structures, used to
//! synthesize labeled training examples for an image-to-markup model.
//!
//! This library provides:
//! - Grid construction: a lattice of horizontal/vertical segment chains
//!   partitioned into interior and outline sets
//! - Stochastic pruning of both sets with independent probabilities
//! - Element and label assignment from a weighted categorical distribution
//! - Deterministic serialization to circuitikz markup, consumed by an
//!   external LaTeX renderer
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Segment data model, grid builder, connectivity check
//! - [`bipole`] - The closed vocabulary of circuit element types
//! - [`config`] - Probability tables and element pools
//! - [`generator`] - The sampling pipeline (grid -> prune -> assign)
//! - [`markup`] - Serialization and content-addressed naming
//! - [`ledger`] - Append-only formula/filename companion files (CLI only)
//!
//! ## Usage
//!
//! ```
//! use circuitgen_core::{Generator, GeneratorConfig, markup};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let generator = Generator::new(GeneratorConfig::default()).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let circuit = generator.generate(&mut rng);
//! let document = markup::serialize(&circuit).unwrap();
//! assert!(document.starts_with(markup::PREAMBLE));
//! ```
//!
//! ## Reproducibility
//!
//! Every stochastic call takes an explicit RNG; there is no ambient random
//! state. A fixed seed reproduces a circuit byte for byte, and batches can
//! be parallelized across independent RNGs since no component keeps state
//! across circuits.
//!
//! Circuits are backed by an ordered set, so serialization order is
//! canonical regardless of construction order. Note that circuits only
//! guarantee *geometric* well-formedness: there is no notion of electrical
//! validity, and pruning may leave the segment graph disconnected.

pub mod bipole;
pub mod circuit;
pub mod config;
pub mod error;
pub mod generator;
pub mod markup;

#[cfg(feature = "cli")]
pub mod ledger;

// Re-export main types for convenience
pub use bipole::Bipole;
pub use circuit::{Circuit, GridSpec, Position, Segment};
pub use config::GeneratorConfig;
pub use error::{CircuitgenError, Result};
pub use generator::Generator;
