//! Mathematical utilities for beam FE calculations

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

use crate::error::{BeamError, BeamResult};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 4x4 matrix for beam element stiffness
pub type Mat4 = SMatrix<f64, 4, 4>;
/// 4-element vector for beam element forces/displacements
pub type Vec4 = SVector<f64, 4>;

/// Pivot magnitudes below this are treated as singular during elimination
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Compute the local stiffness matrix for an Euler-Bernoulli beam element.
///
/// DOF order is [v_i, θ_i, v_j, θ_j] with deflection upward positive.
///
/// # Arguments
/// * `ei` - Flexural rigidity in N·mm²
/// * `length` - Element length in mm
pub fn beam_stiffness(ei: f64, length: f64) -> Mat4 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;
    let k = ei / l3;

    #[rustfmt::skip]
    let data = [
        12.0 * k,     6.0 * l * k,    -12.0 * k,    6.0 * l * k,
        6.0 * l * k,  4.0 * l2 * k,   -6.0 * l * k, 2.0 * l2 * k,
        -12.0 * k,    -6.0 * l * k,   12.0 * k,     -6.0 * l * k,
        6.0 * l * k,  2.0 * l2 * k,   -6.0 * l * k, 4.0 * l2 * k,
    ];

    Mat4::from_row_slice(&data)
}

/// Hermite cubic shape functions for beam deflection, evaluated at the
/// parametric coordinate xi in [0, 1]
pub fn shape_functions(xi: f64, length: f64) -> [f64; 4] {
    let xi2 = xi * xi;
    let xi3 = xi2 * xi;
    [
        1.0 - 3.0 * xi2 + 2.0 * xi3,
        length * (xi - 2.0 * xi2 + xi3),
        3.0 * xi2 - 2.0 * xi3,
        length * (xi3 - xi2),
    ]
}

/// Consistent nodal loads for a transverse point load.
///
/// `p` is already in the internal convention (upward positive); `xi` is
/// clamped into [0, 1].
pub fn consistent_point_load(p: f64, xi: f64, length: f64) -> Vec4 {
    let xi = xi.clamp(0.0, 1.0);
    let n = shape_functions(xi, length);
    Vec4::new(n[0] * p, n[1] * p, n[2] * p, n[3] * p)
}

/// Consistent nodal loads for a distributed intensity q(x) (upward
/// positive) acting over [a, b] within an element spanning [x0, x1].
///
/// Evaluates f = ∫ Nᵀ·q dx over the coverage interval with the composite
/// trapezoidal rule on `n` subintervals. An empty interval contributes
/// nothing.
pub fn consistent_distributed_load(
    q: impl Fn(f64) -> f64,
    x0: f64,
    x1: f64,
    a: f64,
    b: f64,
    n: usize,
) -> Vec4 {
    let mut fe = Vec4::zeros();
    if b <= a {
        return fe;
    }
    let length = x1 - x0;
    let h = (b - a) / n as f64;

    for k in 0..=n {
        let x = a + k as f64 * h;
        let xi = (x - x0) / length;
        let shapes = shape_functions(xi, length);
        let weight = if k == 0 || k == n { 0.5 } else { 1.0 };
        let qx = q(x);
        for (f, s) in fe.iter_mut().zip(shapes.iter()) {
            *f += weight * s * qx * h;
        }
    }
    fe
}

/// Solve a dense linear system by Gaussian elimination with partial
/// pivoting.
///
/// The pivot at each step is the largest-magnitude entry in the remaining
/// column; a pivot below [`PIVOT_TOLERANCE`] fails with
/// [`BeamError::SingularMatrix`] instead of dividing through.
pub fn solve_gaussian(a: &Mat, b: &Vec) -> BeamResult<Vec> {
    let n = b.len();
    debug_assert_eq!(a.nrows(), n);
    debug_assert_eq!(a.ncols(), n);

    let mut m = a.clone();
    let mut rhs = b.clone();

    for k in 0..n {
        let mut pivot_row = k;
        let mut pivot_mag = m[(k, k)].abs();
        for i in (k + 1)..n {
            let mag = m[(i, k)].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = i;
            }
        }
        if pivot_mag < PIVOT_TOLERANCE {
            return Err(BeamError::SingularMatrix);
        }
        if pivot_row != k {
            m.swap_rows(k, pivot_row);
            rhs.swap_rows(k, pivot_row);
        }

        let pivot = m[(k, k)];
        for j in k..n {
            m[(k, j)] /= pivot;
        }
        rhs[k] /= pivot;

        for i in (k + 1)..n {
            let factor = m[(i, k)];
            if factor.abs() < 1e-15 {
                continue;
            }
            for j in k..n {
                m[(i, j)] -= factor * m[(k, j)];
            }
            rhs[i] -= factor * rhs[k];
        }
    }

    // Back substitution; the diagonal was normalized to 1 above
    let mut x = Vec::zeros(n);
    for i in (0..n).rev() {
        let mut s = rhs[i];
        for j in (i + 1)..n {
            s -= m[(i, j)] * x[j];
        }
        x[i] = s;
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stiffness_symmetry() {
        let k = beam_stiffness(6.5e13, 6000.0);
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_stiffness_entries() {
        let ei = 2.0e10;
        let l = 1000.0;
        let k = beam_stiffness(ei, l);
        assert_relative_eq!(k[(0, 0)], 12.0 * ei / l.powi(3), max_relative = 1e-12);
        assert_relative_eq!(k[(1, 1)], 4.0 * ei / l, max_relative = 1e-12);
        assert_relative_eq!(k[(1, 3)], 2.0 * ei / l, max_relative = 1e-12);
        assert_relative_eq!(k[(0, 2)], -12.0 * ei / l.powi(3), max_relative = 1e-12);
    }

    #[test]
    fn test_shape_functions_at_ends() {
        let l = 2500.0;
        let at_start = shape_functions(0.0, l);
        assert_eq!(at_start, [1.0, 0.0, 0.0, 0.0]);
        let at_end = shape_functions(1.0, l);
        assert_eq!(at_end, [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_shape_functions_partition_of_unity() {
        let l = 1234.0;
        for &xi in &[0.1, 0.25, 0.5, 0.75, 0.9] {
            let n = shape_functions(xi, l);
            assert_relative_eq!(n[0] + n[2], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_consistent_point_load_midspan() {
        let p = -100.0;
        let l = 2000.0;
        let fe = consistent_point_load(p, 0.5, l);
        assert_relative_eq!(fe[0], p / 2.0, max_relative = 1e-12);
        assert_relative_eq!(fe[1], p * l / 8.0, max_relative = 1e-12);
        assert_relative_eq!(fe[2], p / 2.0, max_relative = 1e-12);
        assert_relative_eq!(fe[3], -p * l / 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_consistent_uniform_load_full_span() {
        let q = -10.0;
        let l = 6000.0;
        let fe = consistent_distributed_load(|_| q, 0.0, l, 0.0, l, 20);
        assert_relative_eq!(fe[0], q * l / 2.0, max_relative = 1e-2);
        assert_relative_eq!(fe[1], q * l * l / 12.0, max_relative = 1e-2);
        assert_relative_eq!(fe[2], q * l / 2.0, max_relative = 1e-2);
        assert_relative_eq!(fe[3], -q * l * l / 12.0, max_relative = 1e-2);
    }

    #[test]
    fn test_consistent_load_empty_interval() {
        let fe = consistent_distributed_load(|_| -5.0, 0.0, 1000.0, 800.0, 200.0, 20);
        assert_eq!(fe, Vec4::zeros());
    }

    #[test]
    fn test_solve_gaussian_known_system() {
        let a = Mat::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = Vec::from_vec(vec![5.0, 10.0]);
        let x = solve_gaussian(&a, &b).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_gaussian_requires_pivoting() {
        let a = Mat::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let b = Vec::from_vec(vec![2.0, 7.0]);
        let x = solve_gaussian(&a, &b).unwrap();
        assert_relative_eq!(x[0], 7.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_gaussian_singular() {
        let a = Mat::zeros(3, 3);
        let b = Vec::from_vec(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            solve_gaussian(&a, &b),
            Err(BeamError::SingularMatrix)
        ));
    }
}
