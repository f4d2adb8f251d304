//! # Braidsim Viz
//!
//! ASCII diagrams for Braidsim circuits, topologies, and state vectors.
//!
//! Everything here is a read-only consumer of the core: rendering borrows
//! the circuit's gate list, the topology's connections, and a state
//! vector, and never mutates any of them.
//!
//! ```rust
//! use braidsim_core::prelude::*;
//! use braidsim_viz::draw_circuit;
//!
//! let circuit = Circuit::new(Topology::new(2)?);
//! let diagram = draw_circuit(&circuit);
//! assert!(diagram.contains("Quantum Circuit:"));
//! # Ok::<(), BraidError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use braidsim_core::{Circuit, GateKind, Topology};
use num_complex::Complex64;

const RULE_WIDTH: usize = 40;

// ============================================================================
// Circuit Diagram
// ============================================================================

/// Render the circuit's default gate sequence as an ASCII diagram
pub fn draw_circuit(circuit: &Circuit) -> String {
    let mut output = Vec::new();
    output.push("Quantum Circuit:".to_string());
    output.push("-".repeat(RULE_WIDTH));

    for (i, gate) in circuit.default_gates().iter().enumerate() {
        output.push(format!("Gate {}: {}", i, gate.name()));
        if gate.kind() == GateKind::Cnot {
            output.push("  |control⟩ ──●──".to_string());
            output.push("            │".to_string());
            output.push("  |target⟩  ─⊕─".to_string());
        } else {
            output.push(format!("  |ψ⟩ ──{}──", gate.name()));
        }
        output.push(String::new());
    }

    output.join("\n")
}

// ============================================================================
// Topology Diagram
// ============================================================================

/// Render the topology's connectivity as one row per qubit
pub fn draw_topology(topology: &Topology) -> String {
    let mut output = Vec::new();
    output.push("Topology Layout:".to_string());
    output.push("-".repeat(RULE_WIDTH));

    for i in 0..topology.depth() {
        let mut line = format!("Q{}", i);
        for j in 0..topology.depth() {
            // Connections are stored as (i, j) with i < j
            if topology.connections().contains(&(i, j)) {
                line.push_str("──●──");
            } else {
                line.push_str("─────");
            }
        }
        output.push(line);
    }

    output.join("\n")
}

// ============================================================================
// State Diagram
// ============================================================================

/// Render a state vector with basis labels, amplitudes, and probabilities
pub fn draw_state(state: &[Complex64], depth: usize) -> String {
    let mut output = Vec::new();
    output.push("Quantum State:".to_string());
    output.push("-".repeat(RULE_WIDTH));

    for (i, amplitude) in state.iter().enumerate() {
        let prob = amplitude.norm_sqr();
        output.push(format!(
            "|{:0width$b}⟩: {:.3}{:+.3}i (Prob: {:.3})",
            i,
            amplitude.re,
            amplitude.im,
            prob,
            width = depth
        ));
    }

    output.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
