//! Generator configuration.
//!
//! All stochastic behavior is driven by a [`GeneratorConfig`]: segment
//! removal probabilities, the element-type categorical distribution, label
//! probability, and the three element pools. The config is read-only once
//! generation starts and is validated up front, before any segment is
//! built.
//!
//! Configs can be loaded from TOML, e.g.:
//!
//! ```toml
//! p_remove_inside_segment = 0.3
//! p_line = 0.55
//! source_pool = ["battery1", "european voltage source"]
//! ```

use serde::Deserialize;

use crate::bipole::{Bipole, GENERIC_POOL, MEASURE_POOL, SOURCE_POOL};
use crate::error::{CircuitgenError, Result};

/// Configuration for the circuit generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Probability of removing each interior segment
    pub p_remove_inside_segment: f64,
    /// Probability of removing each outline segment
    pub p_remove_outline_segment: f64,
    /// Probability that a segment is a plain wire
    pub p_line: f64,
    /// Probability that a segment is drawn from the source pool
    pub p_source: f64,
    /// Probability that a segment is drawn from the measurement pool
    pub p_measure: f64,
    /// Probability that a segment receives a legend label
    pub p_label: f64,
    /// Source elements drawn from when the source branch is hit
    pub source_pool: Vec<Bipole>,
    /// Measurement elements drawn from when the measurement branch is hit
    pub measure_pool: Vec<Bipole>,
    /// Generic bipoles drawn from on the remaining probability mass
    pub generic_pool: Vec<Bipole>,
    /// Redraw circuits until the segment graph is connected
    pub require_connected: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            p_remove_inside_segment: 0.3,
            p_remove_outline_segment: 0.1,
            p_line: 0.55,
            p_source: 0.1,
            p_measure: 0.1,
            p_label: 0.2,
            source_pool: SOURCE_POOL.to_vec(),
            measure_pool: MEASURE_POOL.to_vec(),
            generic_pool: GENERIC_POOL.to_vec(),
            require_connected: false,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| CircuitgenError::config_parse(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    #[cfg(feature = "cli")]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CircuitgenError::ConfigRead {
                path: path.display().to_string(),
                source: e,
            })?;
        Self::from_toml(&content)
    }

    /// Validate all probabilities and pools.
    ///
    /// The categorical thresholds are cumulative; `p_line + p_source +
    /// p_measure` above 1 would starve the generic pool and is reported as
    /// an error rather than silently clamped.
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("p_remove_inside_segment", self.p_remove_inside_segment),
            ("p_remove_outline_segment", self.p_remove_outline_segment),
            ("p_line", self.p_line),
            ("p_source", self.p_source),
            ("p_measure", self.p_measure),
            ("p_label", self.p_label),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(CircuitgenError::invalid_probability(name, value));
            }
        }

        let sum = self.p_line + self.p_source + self.p_measure;
        if sum > 1.0 {
            return Err(CircuitgenError::ProbabilitySum { sum });
        }

        let pools = [
            ("source_pool", &self.source_pool),
            ("measure_pool", &self.measure_pool),
            ("generic_pool", &self.generic_pool),
        ];
        for (name, pool) in pools {
            if pool.is_empty() {
                return Err(CircuitgenError::EmptyPool { pool: name });
            }
        }

        Ok(())
    }
}
