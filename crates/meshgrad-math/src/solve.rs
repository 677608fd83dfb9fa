//! Dense linear solver for the RBF weight system.
//!
//! Solves `A * w = b` in place, where `A` is a small square kernel
//! matrix (at most 32x32) and `b` carries two right-hand-side columns
//! packed as [`Vec2`] rows. Uses Gaussian elimination with partial
//! pivoting followed by back-substitution.
//!
//! Partial pivoting is required here: the RBF kernel matrix is not
//! guaranteed symmetric positive definite, and naive elimination is
//! unstable once control points crowd together.
//!
//! # Example
//!
//! ```rust
//! use meshgrad_math::{linsolve, Vec2};
//!
//! // 2x2 identity: solution equals the right-hand side.
//! let mut a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
//! let mut b = vec![Vec2::new(3.0, -1.0), Vec2::new(0.5, 2.0)];
//! linsolve(&mut a, &mut b);
//! assert_eq!(b[0], Vec2::new(3.0, -1.0));
//! ```

use crate::Vec2;

/// Solves `a * w = b` in place; the solution replaces `b`.
///
/// `a` must be square (`n` rows of `n` columns) and `b` must have `n`
/// rows. Both are consumed as scratch space: `a` ends up in echelon
/// form and `b` holds the solution.
///
/// A zero pivot during back-substitution (degenerate kernel from
/// coincident points) zeroes the affected solution row instead of
/// dividing. The solve then no longer interpolates exactly, which is
/// the documented failure mode for degenerate geometry.
///
/// # Panics
///
/// Debug-asserts that dimensions agree.
pub fn linsolve(a: &mut [Vec<f32>], b: &mut [Vec2]) {
    let n = a.len();
    debug_assert_eq!(b.len(), n, "rhs rows must match matrix rows");
    debug_assert!(a.iter().all(|row| row.len() == n), "matrix must be square");

    // Forward elimination with partial pivoting.
    for c in 0..n.saturating_sub(1) {
        let mut max_row = c;
        let mut max_val = a[c][c].abs();
        for (r, row) in a.iter().enumerate().skip(c + 1) {
            let abs_val = row[c].abs();
            if abs_val > max_val {
                max_val = abs_val;
                max_row = r;
            }
        }

        if max_row != c {
            a.swap(c, max_row);
            b.swap(c, max_row);
        }

        let pivot = a[c][c];
        if pivot == 0.0 {
            // Whole column is zero; nothing to eliminate.
            continue;
        }

        let pivot_row = a[c].clone();
        let pivot_rhs = b[c];
        for r in c + 1..n {
            let factor = a[r][c] / pivot;
            if factor == 0.0 {
                continue;
            }
            for i in c..n {
                a[r][i] -= factor * pivot_row[i];
            }
            b[r] = b[r] - pivot_rhs * factor;
        }
    }

    // Back-substitution.
    for r in (0..n).rev() {
        for c in r + 1..n {
            b[r] = b[r] - b[c] * a[r][c];
        }
        let pivot = a[r][r];
        if pivot != 0.0 {
            b[r] = b[r] / pivot;
        } else {
            b[r] = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec2_close(a: Vec2, b: Vec2, tol: f32) {
        assert!(
            (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_identity_system() {
        let mut a = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ];
        let mut b = vec![
            Vec2::new(1.0, 4.0),
            Vec2::new(2.0, 5.0),
            Vec2::new(3.0, 6.0),
        ];
        linsolve(&mut a, &mut b);
        assert_vec2_close(b[0], Vec2::new(1.0, 4.0), 1e-6);
        assert_vec2_close(b[1], Vec2::new(2.0, 5.0), 1e-6);
        assert_vec2_close(b[2], Vec2::new(3.0, 6.0), 1e-6);
    }

    #[test]
    fn test_known_solution() {
        // [2 1; 1 3] * [1; 2] = [4; 7]
        let mut a = vec![vec![2.0, 1.0], vec![1.0, 3.0]];
        let mut b = vec![Vec2::new(4.0, 4.0), Vec2::new(7.0, 7.0)];
        linsolve(&mut a, &mut b);
        assert_vec2_close(b[0], Vec2::new(1.0, 1.0), 1e-5);
        assert_vec2_close(b[1], Vec2::new(2.0, 2.0), 1e-5);
    }

    #[test]
    fn test_pivoting_required() {
        // Zero in the leading position forces a row swap.
        let mut a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let mut b = vec![Vec2::new(2.0, -2.0), Vec2::new(3.0, -3.0)];
        linsolve(&mut a, &mut b);
        assert_vec2_close(b[0], Vec2::new(3.0, -3.0), 1e-6);
        assert_vec2_close(b[1], Vec2::new(2.0, -2.0), 1e-6);
    }

    #[test]
    fn test_residual_random_system() {
        // Deterministic pseudo-random well-conditioned system; verify
        // A * w recovers the original rhs.
        let n = 8;
        let elem = |r: usize, c: usize| {
            let v = ((r * 31 + c * 17 + 7) % 23) as f32 / 23.0;
            if r == c { v + 4.0 } else { v }
        };
        let a: Vec<Vec<f32>> = (0..n).map(|r| (0..n).map(|c| elem(r, c)).collect()).collect();
        let rhs: Vec<Vec2> = (0..n)
            .map(|r| Vec2::new(r as f32 * 0.3 - 1.0, 1.0 - r as f32 * 0.2))
            .collect();

        let mut a_scratch = a.clone();
        let mut w = rhs.clone();
        linsolve(&mut a_scratch, &mut w);

        for r in 0..n {
            let mut acc = Vec2::ZERO;
            for c in 0..n {
                acc += w[c] * a[r][c];
            }
            assert_vec2_close(acc, rhs[r], 1e-3);
        }
    }

    #[test]
    fn test_singular_matrix_does_not_panic() {
        // Two identical rows: rank deficient. The solve must complete
        // and produce finite values (zero-pivot rows are zeroed).
        let mut a = vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.0, 1.0],
        ];
        let mut b = vec![Vec2::ONE, Vec2::ONE, Vec2::ZERO];
        linsolve(&mut a, &mut b);
        for row in &b {
            assert!(row.is_finite());
        }
    }
}
