//! Kronecker products and sums of dense matrices.
//!
//! The 2D Laplacian on an `nx × ny` grid, flattened as `k = iy * nx + ix`
//! (x fastest), is the Kronecker sum of the two axis operators:
//!
//! ```text
//! L = kron(I_y, A_x) + kron(B_y, I_x)
//! ```
//!
//! `kron(I_y, A_x)` is block diagonal (one copy of `A_x` per y row) and
//! `kron(B_y, I_x)` couples rows `nx` apart.

use faer::Mat;

/// n×n identity.
pub fn identity(n: usize) -> Mat<f64> {
    Mat::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
}

/// Kronecker product `a ⊗ b`.
pub fn kron(a: &Mat<f64>, b: &Mat<f64>) -> Mat<f64> {
    let (br, bc) = (b.nrows(), b.ncols());
    Mat::from_fn(a.nrows() * br, a.ncols() * bc, |i, j| {
        a[(i / br, j / bc)] * b[(i % br, j % bc)]
    })
}

/// Kronecker sum `kron(I_b, a) + kron(b, I_a)` of two square matrices.
///
/// `a` acts along the fast (x) index, `b` along the slow (y) index.
pub fn kronecker_sum(a: &Mat<f64>, b: &Mat<f64>) -> Mat<f64> {
    debug_assert_eq!(a.nrows(), a.ncols(), "x operator must be square");
    debug_assert_eq!(b.nrows(), b.ncols(), "y operator must be square");

    let nx = a.nrows();
    let n = nx * b.nrows();
    Mat::from_fn(n, n, |r, c| kronecker_sum_entry(a, b, nx, r, c))
}

/// Parallel version of [`kronecker_sum`]: rows are assembled concurrently.
///
/// Produces exactly the same matrix as the serial version.
#[cfg(feature = "parallel")]
pub fn kronecker_sum_parallel(a: &Mat<f64>, b: &Mat<f64>) -> Mat<f64> {
    use rayon::prelude::*;

    debug_assert_eq!(a.nrows(), a.ncols(), "x operator must be square");
    debug_assert_eq!(b.nrows(), b.ncols(), "y operator must be square");

    let nx = a.nrows();
    let n = nx * b.nrows();

    // Row-major scratch buffer
    let data: Vec<f64> = (0..n)
        .into_par_iter()
        .flat_map_iter(|r| (0..n).map(move |c| kronecker_sum_entry(a, b, nx, r, c)))
        .collect();

    Mat::from_fn(n, n, |r, c| data[r * n + c])
}

#[inline]
fn kronecker_sum_entry(a: &Mat<f64>, b: &Mat<f64>, nx: usize, r: usize, c: usize) -> f64 {
    let (ry, rx) = (r / nx, r % nx);
    let (cy, cx) = (c / nx, c % nx);

    let mut value = 0.0;
    if ry == cy {
        value += a[(rx, cx)];
    }
    if rx == cx {
        value += b[(ry, cy)];
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(rows: &[&[f64]]) -> Mat<f64> {
        Mat::from_fn(rows.len(), rows[0].len(), |i, j| rows[i][j])
    }

    #[test]
    fn test_identity() {
        let i3 = identity(3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(i3[(r, c)], if r == c { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_kron_small() {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = mat(&[&[0.0, 5.0], &[6.0, 7.0]]);
        let k = kron(&a, &b);

        let expected = [
            [0.0, 5.0, 0.0, 10.0],
            [6.0, 7.0, 12.0, 14.0],
            [0.0, 15.0, 0.0, 20.0],
            [18.0, 21.0, 24.0, 28.0],
        ];
        assert_eq!((k.nrows(), k.ncols()), (4, 4));
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(k[(r, c)], expected[r][c], "entry ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_kron_rectangular_shape() {
        let a = mat(&[&[1.0, 2.0, 3.0]]);
        let b = mat(&[&[1.0], &[-1.0]]);
        let k = kron(&a, &b);
        assert_eq!((k.nrows(), k.ncols()), (2, 3));
        assert_eq!(k[(1, 2)], -3.0);
    }

    #[test]
    fn test_kronecker_sum_matches_explicit_kron() {
        let a = mat(&[&[-3.0, 1.0, 0.0], &[1.0, -2.0, 1.0], &[0.0, 1.0, -2.0]]);
        let b = mat(&[&[-1.0, 2.0], &[2.0, -4.0]]);

        let sum = kronecker_sum(&a, &b);
        let lhs = kron(&identity(2), &a);
        let rhs = kron(&b, &identity(3));

        assert_eq!((sum.nrows(), sum.ncols()), (6, 6));
        for r in 0..6 {
            for c in 0..6 {
                assert_eq!(sum[(r, c)], lhs[(r, c)] + rhs[(r, c)], "entry ({r}, {c})");
            }
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let a = mat(&[&[-2.0, 1.0, 0.0], &[1.0, -2.0, 1.0], &[0.0, 1.0, -2.0]]);
        let b = mat(&[
            &[-4.0, 4.0, 0.0, 0.0],
            &[4.0, -8.0, 4.0, 0.0],
            &[0.0, 4.0, -8.0, 4.0],
            &[0.0, 0.0, 4.0, -12.0],
        ]);
        let serial = kronecker_sum(&a, &b);
        let parallel = kronecker_sum_parallel(&a, &b);
        for r in 0..12 {
            for c in 0..12 {
                assert_eq!(serial[(r, c)], parallel[(r, c)], "entry ({r}, {c})");
            }
        }
    }
}
