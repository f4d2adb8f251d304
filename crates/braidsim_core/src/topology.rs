//! Chern-Simons topology for Braidsim
//!
//! Fixed qubit connectivity and the braiding-phase model over `depth`
//! qubits. A topology is pure data: immutable after construction and
//! shared read-only by the circuit and any renderer.

use crate::constants::braid::BRAID_PHASE;
use crate::error::{BraidError, BraidResult};
use crate::gate::GateKind;
use crate::types::{Mat4Real, QubitId};
use serde::{Deserialize, Serialize};

/// Operations permitted on any in-range qubit
const ALLOWED_OPERATIONS: [GateKind; 4] = [GateKind::H, GateKind::X, GateKind::Z, GateKind::Phase];

/// Qubit topology with a Chern-Simons braiding phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    /// Number of qubits
    depth: usize,

    /// State-vector length: 2^depth
    dimension: usize,

    /// Connected pairs (i, j) with i < j, lexicographic order
    connections: Vec<(QubitId, QubitId)>,

    /// Topological phase for braiding rotations (radians)
    braid_phase: f64,
}

impl Topology {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a topology with the default braiding phase of pi/4
    ///
    /// Connectivity is the complete graph on `depth` qubits.
    pub fn new(depth: usize) -> BraidResult<Self> {
        Self::with_phase(depth, BRAID_PHASE)
    }

    /// Create a topology with a custom braiding phase
    pub fn with_phase(depth: usize, braid_phase: f64) -> BraidResult<Self> {
        if depth < 1 {
            return Err(BraidError::InvalidDepth(depth));
        }

        let mut connections = Vec::with_capacity(depth * depth.saturating_sub(1) / 2);
        for i in 0..depth {
            for j in i + 1..depth {
                connections.push((i, j));
            }
        }

        Ok(Self {
            depth,
            dimension: 1 << depth,
            connections,
            braid_phase,
        })
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Get number of qubits
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get state-vector length (2^depth)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get connected pairs, each (i, j) with i < j
    pub fn connections(&self) -> &[(QubitId, QubitId)] {
        &self.connections
    }

    /// Get number of connected pairs
    pub fn num_connections(&self) -> usize {
        self.connections.len()
    }

    /// Get the braiding phase in radians
    pub fn braid_phase(&self) -> f64 {
        self.braid_phase
    }

    // ========================================================================
    // Connectivity Queries
    // ========================================================================

    /// Check if two qubits are connected (order-insensitive)
    pub fn is_connected(&self, q1: QubitId, q2: QubitId) -> bool {
        self.connections.contains(&(q1, q2)) || self.connections.contains(&(q2, q1))
    }

    /// Get catalogue operations allowed on a qubit
    ///
    /// Returns an empty slice for out-of-range qubits.
    pub fn allowed_operations(&self, qubit: QubitId) -> &'static [GateKind] {
        if qubit < self.depth {
            &ALLOWED_OPERATIONS
        } else {
            &[]
        }
    }

    // ========================================================================
    // Braiding
    // ========================================================================

    /// Braiding transform between two qubits
    ///
    /// Connected pairs get a block rotation by the topological phase;
    /// unconnected pairs get the 4x4 identity.
    pub fn braiding(&self, q1: QubitId, q2: QubitId) -> Mat4Real {
        if !self.is_connected(q1, q2) {
            return identity4();
        }

        let c = self.braid_phase.cos();
        let s = self.braid_phase.sin();
        [
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, c, -s],
            [0.0, 0.0, s, c],
        ]
    }
}

fn identity4() -> Mat4Real {
    let mut m = [[0.0; 4]; 4];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    m
}

// ============================================================================
// Display
// ============================================================================

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Topology({} qubits, dimension {}, {} connections)",
            self.depth,
            self.dimension,
            self.num_connections()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
