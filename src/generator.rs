//! The stochastic generation pipeline.
//!
//! One circuit is produced by an atomic chain: sample a [`GridSpec`], build
//! the interior and outline segment sets, prune each independently, then
//! type every surviving segment. All randomness comes from the RNG the
//! caller passes in, so a fixed seed reproduces the circuit byte for byte
//! and batches can run in parallel over independent RNGs.

use std::collections::BTreeSet;

use log::debug;
use rand::Rng;

use crate::bipole::Bipole;
use crate::circuit::{is_connected, Circuit, GridSpec, Segment};
use crate::config::GeneratorConfig;
use crate::error::{CircuitgenError, Result};

/// Legend symbols a label subscript is attached to.
const LABEL_SYMBOLS: [char; 6] = ['R', 'C', 'L', 'V', 'I', 'Z'];

/// Circuit generator with a validated, read-only configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator, validating the configuration up front.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this generator draws from.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one circuit.
    ///
    /// No connectivity guarantee: pruning may leave the segment graph
    /// disconnected or dangling, which is an accepted outcome.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Circuit {
        let spec = GridSpec::sample(rng);
        let interior = spec.interior_segments();
        let outline = spec.outline_segments();
        debug!(
            "sampled grid: {} interior, {} outline segments",
            interior.len(),
            outline.len()
        );

        let mut kept = prune(interior, self.config.p_remove_inside_segment, rng);
        kept.extend(prune(outline, self.config.p_remove_outline_segment, rng));
        debug!("kept {} segments after pruning", kept.len());

        kept.into_iter()
            .map(|segment| self.assign(segment, rng))
            .collect()
    }

    /// Generate a circuit whose segment graph is connected, redrawing up to
    /// `max_attempts` times.
    pub fn generate_connected<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Circuit> {
        for _ in 0..max_attempts {
            let circuit = self.generate(rng);
            if is_connected(&circuit) {
                return Ok(circuit);
            }
        }
        Err(CircuitgenError::ConnectedRetryExhausted {
            attempts: max_attempts,
        })
    }

    /// Type one segment and optionally attach a label.
    fn assign<R: Rng + ?Sized>(&self, segment: Segment, rng: &mut R) -> Segment {
        let segment = segment.with_kind(self.draw_kind(rng));
        if rng.random::<f64>() < self.config.p_label {
            segment.with_label(draw_label(rng))
        } else {
            segment
        }
    }

    /// Draw an element type from the weighted categorical distribution.
    ///
    /// Thresholds are cumulative: wire, then the source pool, then the
    /// measurement pool, with the generic pool covering the remainder.
    fn draw_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> Bipole {
        let c = &self.config;
        let r = rng.random::<f64>();
        if r < c.p_line {
            Bipole::Short
        } else if r < c.p_line + c.p_source {
            draw_from(&c.source_pool, rng)
        } else if r < c.p_line + c.p_source + c.p_measure {
            draw_from(&c.measure_pool, rng)
        } else {
            draw_from(&c.generic_pool, rng)
        }
    }
}

/// Keep each segment independently with probability `1 - p_remove`.
///
/// The uniform draw lies in `[0, 1)`, so `p_remove = 0` keeps everything
/// and `p_remove = 1` removes everything, exactly.
fn prune<R: Rng + ?Sized>(
    segments: BTreeSet<Segment>,
    p_remove: f64,
    rng: &mut R,
) -> BTreeSet<Segment> {
    segments
        .into_iter()
        .filter(|_| rng.random::<f64>() >= p_remove)
        .collect()
}

/// Uniform draw from a pool. Pools are validated non-empty on construction.
fn draw_from<R: Rng + ?Sized>(pool: &[Bipole], rng: &mut R) -> Bipole {
    pool[rng.random_range(0..pool.len())]
}

/// A short synthetic legend string, e.g. `$R_{3}$`.
fn draw_label<R: Rng + ?Sized>(rng: &mut R) -> String {
    let symbol = LABEL_SYMBOLS[rng.random_range(0..LABEL_SYMBOLS.len())];
    let index = rng.random_range(1..10);
    format!("${symbol}_{{{index}}}$")
}
