//! Gate catalogue for Braidsim
//!
//! A closed catalogue of named unitary operators. Gate type is resolved
//! into an enum at construction time, so unknown names are rejected at the
//! boundary rather than via runtime string comparison inside the pipeline.
//!
//! Application is chunk-wise over the whole state vector: single-qubit
//! gates act on every consecutive pair of amplitudes, CNOT on every
//! consecutive quad. There is no tensor-product embedding on a designated
//! qubit; this non-standard rule is preserved for behavioral compatibility
//! with the pipeline it reproduces.

use crate::error::{BraidError, BraidResult};
use crate::state::{apply_pairs, apply_quads};
use crate::topology::Topology;
use crate::types::{Mat2, Mat4, StateVector};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Gate Kind
// ============================================================================

/// Catalogue of gate types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate
    H,
    /// Controlled-NOT gate
    Cnot,
    /// Phase gate diag(1, i)
    Phase,
    /// Pauli-X gate (NOT)
    X,
    /// Pauli-Z gate
    Z,
}

impl GateKind {
    /// All catalogue kinds, in the circuit's default order
    pub const ALL: [GateKind; 5] = [
        GateKind::H,
        GateKind::Cnot,
        GateKind::Phase,
        GateKind::X,
        GateKind::Z,
    ];

    /// Parse a catalogue name
    ///
    /// Names are case-sensitive; anything outside the catalogue fails with
    /// [`BraidError::InvalidGateType`].
    pub fn parse(name: &str) -> BraidResult<Self> {
        match name {
            "H" => Ok(GateKind::H),
            "CNOT" => Ok(GateKind::Cnot),
            "Phase" => Ok(GateKind::Phase),
            "X" => Ok(GateKind::X),
            "Z" => Ok(GateKind::Z),
            _ => Err(BraidError::InvalidGateType(name.to_string())),
        }
    }

    /// Get catalogue name
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::Cnot => "CNOT",
            GateKind::Phase => "Phase",
            GateKind::X => "X",
            GateKind::Z => "Z",
        }
    }

    /// Check if kind acts on amplitude quads (two-qubit)
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, GateKind::Cnot)
    }
}

impl FromStr for GateKind {
    type Err = BraidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Gate Matrices
// ============================================================================

/// Fixed unitary matrix of a gate: 2x2 for single-qubit kinds, 4x4 for CNOT
#[derive(Debug, Clone, PartialEq)]
pub enum GateMatrix {
    /// Single-qubit 2x2 unitary
    Single(Mat2),
    /// Two-qubit 4x4 unitary
    Two(Mat4),
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn hadamard() -> Mat2 {
    let h = 1.0 / 2.0_f64.sqrt();
    [[c(h, 0.0), c(h, 0.0)], [c(h, 0.0), c(-h, 0.0)]]
}

fn phase() -> Mat2 {
    [[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(0.0, 1.0)]]
}

fn pauli_x() -> Mat2 {
    [[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]]
}

fn pauli_z() -> Mat2 {
    [[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(-1.0, 0.0)]]
}

fn cnot() -> Mat4 {
    let zero = c(0.0, 0.0);
    let one = c(1.0, 0.0);
    [
        [one, zero, zero, zero],
        [zero, one, zero, zero],
        [zero, zero, zero, one],
        [zero, zero, one, zero],
    ]
}

// ============================================================================
// Gate
// ============================================================================

/// A catalogued unitary gate
///
/// Cheap value object: the matrix is fixed at construction and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    kind: GateKind,
    matrix: GateMatrix,
}

impl Gate {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a gate of the given kind with its catalogue matrix
    pub fn new(kind: GateKind) -> Self {
        let matrix = match kind {
            GateKind::H => GateMatrix::Single(hadamard()),
            GateKind::Cnot => GateMatrix::Two(cnot()),
            GateKind::Phase => GateMatrix::Single(phase()),
            GateKind::X => GateMatrix::Single(pauli_x()),
            GateKind::Z => GateMatrix::Single(pauli_z()),
        };
        Self { kind, matrix }
    }

    /// Create a gate from a catalogue name
    ///
    /// Fails with [`BraidError::InvalidGateType`] for unrecognized names.
    pub fn parse(name: &str) -> BraidResult<Self> {
        Ok(Self::new(GateKind::parse(name)?))
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Get gate kind
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Get catalogue name
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Get the fixed unitary matrix
    pub fn matrix(&self) -> &GateMatrix {
        &self.matrix
    }

    // ========================================================================
    // Application
    // ========================================================================

    /// Apply the gate chunk-wise, producing a new state vector
    ///
    /// The `topology` argument is accepted for forward compatibility with
    /// qubit-aware embedding and is unused by the current application rule.
    ///
    /// Fails with [`BraidError::DimensionMismatch`] when the state length
    /// is not divisible by the chunk width (2 for single-qubit kinds, 4
    /// for CNOT).
    pub fn apply(
        &self,
        state: &[Complex64],
        _topology: Option<&Topology>,
    ) -> BraidResult<StateVector> {
        match &self.matrix {
            GateMatrix::Single(m) => apply_pairs(state, m),
            GateMatrix::Two(m) => apply_quads(state, m),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

// ============================================================================
// Tests
// ============================================================================
