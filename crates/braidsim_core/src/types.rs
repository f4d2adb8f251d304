//! Core types for Braidsim
//!
//! Fundamental type aliases shared by the topology, gate, and circuit
//! modules.

use num_complex::Complex64;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed)
pub type QubitId = usize;

/// Complex amplitude of a basis state
pub type Amplitude = Complex64;

/// Complex state vector of length `2^depth`
pub type StateVector = Vec<Complex64>;

/// 2x2 complex matrix (single-qubit gates)
pub type Mat2 = [[Complex64; 2]; 2];

/// 4x4 complex matrix (two-qubit gates)
pub type Mat4 = [[Complex64; 4]; 4];

/// 4x4 real matrix (braiding rotations)
pub type Mat4Real = [[f64; 4]; 4];
