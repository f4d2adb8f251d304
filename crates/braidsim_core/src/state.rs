//! State vector operations for Braidsim
//!
//! Chunk-wise matrix application and normalization over complex amplitude
//! slices. Gates and braiding transforms are applied to consecutive chunks
//! of the whole vector rather than embedded on designated qubits via tensor
//! products; this reproduces the reshape semantics of the evolution
//! pipeline and is deliberately non-standard.

use crate::constants::numeric::NORM_EPSILON;
use crate::error::{BraidError, BraidResult};
use crate::types::{Mat2, Mat4, Mat4Real, StateVector};
use num_complex::Complex64;

// ============================================================================
// Construction
// ============================================================================

/// Basis vector `e0`: amplitude 1 at index 0, 0 elsewhere
pub fn basis_zero(dimension: usize) -> StateVector {
    let mut state = vec![Complex64::new(0.0, 0.0); dimension];
    if dimension > 0 {
        state[0] = Complex64::new(1.0, 0.0);
    }
    state
}

// ============================================================================
// Normalization
// ============================================================================

/// Sum of squared amplitude magnitudes
pub fn norm_sqr(state: &[Complex64]) -> f64 {
    state.iter().map(|a| a.norm_sqr()).sum()
}

/// Rescale so squared magnitudes sum to 1
///
/// Fails with [`BraidError::DegenerateState`] instead of producing
/// non-finite amplitudes when the norm is (near-)zero.
pub fn normalized(state: &[Complex64]) -> BraidResult<StateVector> {
    let norm_sqr = norm_sqr(state);
    if norm_sqr < NORM_EPSILON {
        return Err(BraidError::DegenerateState);
    }

    let norm = norm_sqr.sqrt();
    Ok(state.iter().map(|&a| a / norm).collect())
}

// ============================================================================
// Chunk-Wise Application
// ============================================================================

/// Apply a 2x2 matrix to every consecutive pair of amplitudes
///
/// Each chunk `c` is replaced by `m · c`, matching a row-vector product
/// with the transposed matrix in the original reshape formulation.
pub fn apply_pairs(state: &[Complex64], m: &Mat2) -> BraidResult<StateVector> {
    if state.len() % 2 != 0 {
        return Err(BraidError::DimensionMismatch {
            len: state.len(),
            chunk: 2,
        });
    }

    let mut result = Vec::with_capacity(state.len());
    for chunk in state.chunks_exact(2) {
        for row in m {
            result.push(row[0] * chunk[0] + row[1] * chunk[1]);
        }
    }
    Ok(result)
}

/// Apply a 4x4 complex matrix to every consecutive quad of amplitudes
pub fn apply_quads(state: &[Complex64], m: &Mat4) -> BraidResult<StateVector> {
    if state.len() % 4 != 0 {
        return Err(BraidError::DimensionMismatch {
            len: state.len(),
            chunk: 4,
        });
    }

    let mut result = Vec::with_capacity(state.len());
    for chunk in state.chunks_exact(4) {
        for row in m {
            result.push(
                row[0] * chunk[0] + row[1] * chunk[1] + row[2] * chunk[2] + row[3] * chunk[3],
            );
        }
    }
    Ok(result)
}

/// Apply a 4x4 real matrix to every consecutive quad of amplitudes
pub fn apply_quads_real(state: &[Complex64], m: &Mat4Real) -> BraidResult<StateVector> {
    if state.len() % 4 != 0 {
        return Err(BraidError::DimensionMismatch {
            len: state.len(),
            chunk: 4,
        });
    }

    let mut result = Vec::with_capacity(state.len());
    for chunk in state.chunks_exact(4) {
        for row in m {
            result.push(
                chunk[0] * row[0] + chunk[1] * row[1] + chunk[2] * row[2] + chunk[3] * row[3],
            );
        }
    }
    Ok(result)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn re(values: &[f64]) -> StateVector {
        values.iter().map(|&v| Complex64::new(v, 0.0)).collect()
    }

    #[test]
    fn test_basis_zero() {
        let state = basis_zero(4);
        assert_eq!(state.len(), 4);
        assert_eq!(state[0], Complex64::new(1.0, 0.0));
        assert!(state[1..].iter().all(|a| a.norm_sqr() == 0.0));
    }

    #[test]
    fn test_norm_sqr() {
        let state = re(&[0.6, 0.8]);
        assert_relative_eq!(norm_sqr(&state), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized() {
        let state = re(&[3.0, 4.0]);
        let normed = normalized(&state).unwrap();
        assert_relative_eq!(norm_sqr(&normed), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normed[0].re, 0.6, epsilon = 1e-12);
        assert_relative_eq!(normed[1].re, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_degenerate() {
        let state = re(&[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(normalized(&state), Err(BraidError::DegenerateState));
    }

    #[test]
    fn test_apply_pairs_identity() {
        let one = Complex64::new(1.0, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        let id: Mat2 = [[one, zero], [zero, one]];

        let state = re(&[0.1, 0.2, 0.3, 0.4]);
        let result = apply_pairs(&state, &id).unwrap();
        assert_eq!(result, state);
    }

    #[test]
    fn test_apply_pairs_odd_length() {
        let one = Complex64::new(1.0, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        let id: Mat2 = [[one, zero], [zero, one]];

        let state = re(&[1.0, 0.0, 0.0]);
        assert_eq!(
            apply_pairs(&state, &id),
            Err(BraidError::DimensionMismatch { len: 3, chunk: 2 })
        );
    }

    #[test]
    fn test_apply_quads_length_two() {
        let mut id: Mat4 = [[Complex64::new(0.0, 0.0); 4]; 4];
        for (i, row) in id.iter_mut().enumerate() {
            row[i] = Complex64::new(1.0, 0.0);
        }

        let state = re(&[1.0, 0.0]);
        assert_eq!(
            apply_quads(&state, &id),
            Err(BraidError::DimensionMismatch { len: 2, chunk: 4 })
        );
    }

    #[test]
    fn test_apply_quads_real_rotation() {
        // 90-degree rotation in the first block swaps the first two amplitudes
        let m: Mat4Real = [
            [0.0, -1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, -1.0],
            [0.0, 0.0, 1.0, 0.0],
        ];

        let state = re(&[1.0, 0.0, 0.0, 0.0]);
        let result = apply_quads_real(&state, &m).unwrap();
        assert_relative_eq!(result[0].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result[1].re, 1.0, epsilon = 1e-12);
    }
}
