//! # Braidsim Core
//!
//! Simulator for a small fixed-topology qubit register: complex state
//! vectors, a closed catalogue of unitary gates, and pairwise braiding
//! transforms derived from a Chern-Simons connectivity topology.
//!
//! Gates are applied chunk-wise over the whole state vector (consecutive
//! pairs for single-qubit gates, consecutive quads for CNOT and braiding).
//! This is not tensor-product embedding on designated qubits; the
//! non-standard rule is preserved deliberately for behavioral
//! compatibility with the pipeline it reproduces.
//!
//! ## Quick Start
//!
//! ```rust
//! use braidsim_core::prelude::*;
//!
//! let topology = Topology::new(3)?;
//! let circuit = Circuit::new(topology);
//!
//! // Encode a prompt and evolve it through the default gate sequence
//! let state = circuit.prepare_input("hello")?;
//! let evolved = circuit.evolve(&state, None)?;
//! assert_eq!(evolved.len(), 8);
//! # Ok::<(), BraidError>(())
//! ```
//!
//! ## Custom Gate Sequence
//!
//! ```rust
//! use braidsim_core::prelude::*;
//!
//! let circuit = Circuit::new(Topology::new(2)?);
//! let params = EvolveParams::parse(&["H", "CNOT"])?;
//!
//! let state = circuit.prepare_input("A")?;
//! let evolved = circuit.evolve(&state, Some(&params))?;
//! # Ok::<(), BraidError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core type aliases
pub mod types;

/// Braiding and numerical constants
pub mod constants;

/// Error types
pub mod error;

/// State vector operations
pub mod state;

/// Qubit topology and braiding model
pub mod topology;

/// Gate catalogue
pub mod gate;

/// Circuit evolution pipeline
pub mod circuit;

// ============================================================================
// Re-exports
// ============================================================================

pub use circuit::{Circuit, EvolveParams};
pub use constants::{braid, numeric};
pub use error::{BraidError, BraidResult};
pub use gate::{Gate, GateKind, GateMatrix};
pub use topology::Topology;
pub use types::{Amplitude, Mat2, Mat4, Mat4Real, QubitId, StateVector};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use braidsim_core::prelude::*;
    //! ```

    pub use crate::circuit::{Circuit, EvolveParams};
    pub use crate::error::{BraidError, BraidResult};
    pub use crate::gate::{Gate, GateKind};
    pub use crate::topology::Topology;
    pub use crate::types::{Amplitude, QubitId, StateVector};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use crate::constants::numeric::TEST_TOLERANCE;
    use crate::state;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    #[test]
    fn test_full_pipeline_depth_three() {
        let circuit = Circuit::new(Topology::new(3).unwrap());

        let state = circuit.prepare_input("Explain quantum computing in").unwrap();
        assert_eq!(state.len(), 8);
        assert_relative_eq!(state::norm_sqr(&state), 1.0, epsilon = TEST_TOLERANCE);

        let params = EvolveParams::parse(&["H", "CNOT"]).unwrap();
        let evolved = circuit.evolve(&state, Some(&params)).unwrap();
        assert_eq!(evolved.len(), 8);
        assert_relative_eq!(state::norm_sqr(&evolved), 1.0, epsilon = TEST_TOLERANCE);
    }

    #[test]
    fn test_topology_scaling() {
        for depth in [2, 3, 4] {
            let topo = Topology::new(depth).unwrap();
            assert_eq!(topo.dimension(), 1 << depth);
            assert_eq!(topo.num_connections(), depth * (depth - 1) / 2);
        }
    }

    #[test]
    fn test_default_gate_catalogue() {
        let circuit = Circuit::new(Topology::new(3).unwrap());
        let names = circuit.gate_names();

        for required in ["H", "CNOT", "Phase", "X", "Z"] {
            assert!(names.contains(&required), "missing {}", required);
        }
    }

    #[test]
    fn test_evolution_from_basis_state() {
        let circuit = Circuit::new(Topology::new(3).unwrap());
        let initial = state::basis_zero(8);

        let evolved = circuit.evolve(&initial, None).unwrap();
        assert_relative_eq!(state::norm_sqr(&evolved), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_evolution_deterministic() {
        let circuit = Circuit::new(Topology::new(4).unwrap());
        let state = circuit.prepare_input("prompt").unwrap();

        let a = circuit.evolve(&state, None).unwrap();
        let b = circuit.evolve(&state, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_braiding_preserves_norm() {
        // The braid layer alone (empty gate sequence) preserves unit norm
        // before renormalization even kicks in
        let circuit = Circuit::new(Topology::new(3).unwrap());
        let params = EvolveParams::new(vec![]);

        let mut state: StateVector = vec![Complex64::new(0.0, 0.0); 8];
        state[3] = Complex64::new(0.6, 0.0);
        state[5] = Complex64::new(0.0, 0.8);

        let evolved = circuit.evolve(&state, Some(&params)).unwrap();
        assert_relative_eq!(state::norm_sqr(&evolved), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_allowed_operations_surface() {
        let topo = Topology::new(2).unwrap();
        assert_eq!(topo.allowed_operations(1).len(), 4);
        assert!(topo.allowed_operations(7).is_empty());
    }
}
