//! Error types for the circuit generator.
//!
//! This module provides a unified error type [`CircuitgenError`] that covers
//! all error conditions that can occur during configuration validation,
//! circuit generation, and markup output.

use thiserror::Error;

/// Result type alias using [`CircuitgenError`].
pub type Result<T> = std::result::Result<T, CircuitgenError>;

/// Unified error type for all circuit-generation operations.
#[derive(Error, Debug)]
pub enum CircuitgenError {
    // ============ Configuration Errors ============
    /// Grid parameters outside the configured ranges
    #[error("Invalid grid spec: {message}")]
    InvalidGridSpec { message: String },

    /// A probability outside [0, 1]
    #[error("Invalid probability '{name}': {value} is not in [0, 1]")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Categorical element-type probabilities summing above 1
    #[error("Element-type probabilities sum to {sum}, which exceeds 1")]
    ProbabilitySum { sum: f64 },

    /// An element pool with no entries
    #[error("Element pool '{pool}' is empty")]
    EmptyPool { pool: &'static str },

    /// Error parsing a configuration file
    #[error("Configuration error: {message}")]
    ConfigParse { message: String },

    // ============ Generation Errors ============
    /// A segment reached serialization without an element type
    #[error("Segment {from} -> {to} has no element type")]
    UntypedSegment { from: String, to: String },

    /// Connectivity requirement could not be satisfied
    #[error("No connected circuit drawn after {attempts} attempts")]
    ConnectedRetryExhausted { attempts: usize },

    // ============ I/O Errors ============
    /// Error reading a configuration file
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a markup file
    #[error("Failed to write markup file '{path}': {source}")]
    MarkupWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error appending to a ledger file
    #[error("Ledger error on '{path}': {source}")]
    LedgerIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CircuitgenError {
    /// Create an invalid grid spec error
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        Self::InvalidGridSpec {
            message: message.into(),
        }
    }

    /// Create an invalid probability error
    pub fn invalid_probability(name: &'static str, value: f64) -> Self {
        Self::InvalidProbability { name, value }
    }

    /// Create a config parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }
}
