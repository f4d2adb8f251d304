//! Constants for Braidsim
//!
//! Topological phase and numerical thresholds used throughout the core.

// ============================================================================
// Braiding Constants
// ============================================================================

pub mod braid {
    //! Braiding parameters for the Chern-Simons topology

    /// Default topological phase for braiding rotations (radians)
    pub const BRAID_PHASE: f64 = std::f64::consts::FRAC_PI_4;
}

// ============================================================================
// Numerical Constants
// ============================================================================

pub mod numeric {
    //! Numerical thresholds

    /// Squared norms below this are treated as degenerate (zero) states
    pub const NORM_EPSILON: f64 = 1e-12;

    /// Default tolerance for amplitude comparisons in tests
    pub const TEST_TOLERANCE: f64 = 1e-9;
}

// ============================================================================
// Tests
// ============================================================================
