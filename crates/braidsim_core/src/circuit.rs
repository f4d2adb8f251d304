//! Circuit evolution pipeline for Braidsim
//!
//! A circuit owns a [`Topology`] and an ordered default gate sequence, and
//! exposes input encoding and state evolution as pure functions: every
//! public operation takes a borrowed state and returns a new, normalized
//! vector. A single call is a linear pipeline,
//! `encode -> gate layer -> braid layer -> normalize`.

use crate::error::{BraidError, BraidResult};
use crate::gate::{Gate, GateKind};
use crate::state;
use crate::topology::Topology;
use crate::types::StateVector;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Evolution Parameters
// ============================================================================

/// Optional gate-sequence override for [`Circuit::evolve`]
///
/// Names are validated when the parameters are built, so an unknown gate
/// name fails before any part of the state is touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolveParams {
    /// Ordered gate kinds to apply in place of the default sequence
    gates: Vec<GateKind>,
}

/// Raw parameter document shape: {"gates": ["H", "CNOT"]}
#[derive(Deserialize)]
struct RawParams {
    gates: Vec<String>,
}

impl EvolveParams {
    /// Create from already-validated gate kinds
    pub fn new(gates: Vec<GateKind>) -> Self {
        Self { gates }
    }

    /// Parse an ordered list of catalogue names
    ///
    /// Fails with [`BraidError::InvalidGateType`] on the first unknown
    /// name; no partially validated sequence is returned.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> BraidResult<Self> {
        let gates = names
            .iter()
            .map(|n| GateKind::parse(n.as_ref()))
            .collect::<BraidResult<Vec<_>>>()?;
        Ok(Self { gates })
    }

    /// Parse a JSON parameter document of the form `{"gates": [...]}`
    pub fn from_json(json: &str) -> BraidResult<Self> {
        let raw: RawParams = serde_json::from_str(json)?;
        Self::parse(&raw.gates)
    }

    /// Get the gate kinds in application order
    pub fn gates(&self) -> &[GateKind] {
        &self.gates
    }
}

// ============================================================================
// Circuit
// ============================================================================

/// Quantum circuit over a fixed topology
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Topology, read-only after construction
    topology: Topology,

    /// Ordered default gate sequence, fixed at construction
    default_gates: Vec<Gate>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a circuit with the default sequence [H, CNOT, Phase, X, Z]
    pub fn new(topology: Topology) -> Self {
        Self::with_default_sequence(topology, &GateKind::ALL)
    }

    /// Create a circuit with a custom default gate sequence
    pub fn with_default_sequence(topology: Topology, kinds: &[GateKind]) -> Self {
        let default_gates = kinds.iter().map(|&k| Gate::new(k)).collect();
        Self {
            topology,
            default_gates,
        }
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Get the topology
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Get the default gate sequence
    pub fn default_gates(&self) -> &[Gate] {
        &self.default_gates
    }

    /// Get the default sequence's catalogue names, in order
    pub fn gate_names(&self) -> Vec<&'static str> {
        self.default_gates.iter().map(|g| g.name()).collect()
    }

    // ========================================================================
    // Input Encoding
    // ========================================================================

    /// Encode a classical string as a normalized state vector
    ///
    /// Starts from the basis vector `e0`. For each character position
    /// `i < depth`, a chunk-wise Hadamard is applied when the character's
    /// ordinal value is odd; positions at or beyond `depth` are ignored.
    /// The result is renormalized at the boundary.
    pub fn prepare_input(&self, data: &str) -> BraidResult<StateVector> {
        let mut state = state::basis_zero(self.topology.dimension());
        let h_gate = Gate::new(GateKind::H);

        for (i, ch) in data.chars().enumerate() {
            if i >= self.topology.depth() {
                break;
            }
            if (ch as u32) % 2 == 1 {
                state = h_gate.apply(&state, Some(&self.topology))?;
            }
        }

        state::normalized(&state)
    }

    // ========================================================================
    // Evolution
    // ========================================================================

    /// Evolve a state through the gate layer and the braid layer
    ///
    /// The gate layer applies the params sequence when given, otherwise
    /// the circuit's default sequence, each gate chunk-wise in order. The
    /// braid layer then runs once per index pair `(i, j)` with
    /// `0 <= i < j < depth` in lexicographic order, multiplying amplitude
    /// quads by the pair's braiding transform; unconnected pairs multiply
    /// by identity. With fewer than two qubits the braid layer has zero
    /// iterations. The result is renormalized at the boundary.
    ///
    /// The state length must equal the topology dimension, and the
    /// dimension must be divisible by 4 whenever a two-qubit step (CNOT or
    /// braiding) executes.
    pub fn evolve(
        &self,
        state: &[Complex64],
        params: Option<&EvolveParams>,
    ) -> BraidResult<StateVector> {
        if state.len() != self.topology.dimension() {
            return Err(BraidError::StateLengthMismatch {
                expected: self.topology.dimension(),
                got: state.len(),
            });
        }

        let mut current = state.to_vec();
        match params {
            Some(p) => {
                for &kind in p.gates() {
                    current = Gate::new(kind).apply(&current, Some(&self.topology))?;
                }
            }
            None => {
                for gate in &self.default_gates {
                    current = gate.apply(&current, Some(&self.topology))?;
                }
            }
        }

        // Braiding does not commute in general; pair order is fixed.
        for i in 0..self.topology.depth() {
            for j in i + 1..self.topology.depth() {
                let braiding = self.topology.braiding(i, j);
                current = state::apply_quads_real(&current, &braiding)?;
            }
        }

        state::normalized(&current)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circuit({}, default gates [{}])",
            self.topology,
            self.gate_names().join(", ")
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
