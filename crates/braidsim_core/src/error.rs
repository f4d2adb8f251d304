//! Error types for Braidsim
//!
//! All failures in the core are precondition violations: they are surfaced
//! directly to the caller and nothing is retried or partially returned.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for Braidsim
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BraidError {
    // ========================================================================
    // Gate Errors
    // ========================================================================
    /// Gate name outside the catalogue {H, CNOT, Phase, X, Z}
    #[error("Invalid gate type '{0}': must be one of H, CNOT, Phase, X, Z")]
    InvalidGateType(String),

    // ========================================================================
    // Dimension Errors
    // ========================================================================
    /// Topology depth below the minimum of one qubit
    #[error("Invalid depth {0}: must be at least 1")]
    InvalidDepth(usize),

    /// State length not divisible by the chunk width of the operation
    #[error("Dimension mismatch: state length {len} is not divisible by chunk width {chunk}")]
    DimensionMismatch { len: usize, chunk: usize },

    /// State length does not match the topology dimension
    #[error("State length {got} does not match topology dimension {expected}")]
    StateLengthMismatch { expected: usize, got: usize },

    // ========================================================================
    // State Errors
    // ========================================================================
    /// Normalization would divide by a (near-)zero norm
    #[error("Degenerate state: squared norm is zero, cannot normalize")]
    DegenerateState,

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for Braidsim operations
pub type BraidResult<T> = Result<T, BraidError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for BraidError {
    fn from(err: serde_json::Error) -> Self {
        BraidError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl BraidError {
    /// Check if error is a precondition violation on caller-supplied data
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            BraidError::InvalidGateType(_)
                | BraidError::InvalidDepth(_)
                | BraidError::DimensionMismatch { .. }
                | BraidError::StateLengthMismatch { .. }
                | BraidError::DegenerateState
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
