use std::io::Cursor;

use densemat::{Matrix, MatrixError};

const TOL: f64 = 1e-9;

fn assert_matrix_near(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64, msg: &str) {
    assert_eq!(a.nrows(), b.nrows(), "{}: row mismatch", msg);
    assert_eq!(a.ncols(), b.ncols(), "{}: col mismatch", msg);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert!(
                (a[(i, j)] - b[(i, j)]).abs() < tol,
                "{}: element ({}, {}): {} vs {}",
                msg,
                i,
                j,
                a[(i, j)],
                b[(i, j)],
            );
        }
    }
}

// ── Concrete scenarios ──────────────────────────────────────────────

#[test]
fn two_by_two_arithmetic() {
    let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);

    assert_eq!(&a + &b, Matrix::from_rows(2, 2, &[6.0, 8.0, 10.0, 12.0]));
    assert_eq!(&a - &b, Matrix::from_rows(2, 2, &[-4.0, -4.0, -4.0, -4.0]));
    assert_eq!(&a * &b, Matrix::from_rows(2, 2, &[19.0, 22.0, 43.0, 50.0]));
    assert_eq!(2.0 * &a, Matrix::from_rows(2, 2, &[2.0, 4.0, 6.0, 8.0]));
}

#[test]
fn incompatible_product_is_rejected() {
    let a = Matrix::<f64>::zeros(2, 3);
    let b = Matrix::<f64>::zeros(4, 2);
    assert_eq!(
        a.checked_mul(&b).unwrap_err(),
        MatrixError::InnerDimMismatch {
            lhs: (2, 3),
            rhs: (4, 2),
        },
    );
}

#[test]
fn bounds_violation_is_rejected() {
    let m = Matrix::<f64>::zeros(3, 3);
    assert_eq!(
        m.at(5, 0).unwrap_err(),
        MatrixError::OutOfBounds {
            index: (5, 0),
            shape: (3, 3),
        },
    );
}

// ── Algebraic properties ────────────────────────────────────────────

#[test]
fn addition_is_associative_and_commutative() {
    let a = Matrix::from_rows(2, 3, &[1.0, -2.0, 3.5, 0.25, 4.0, -6.0]);
    let b = Matrix::from_rows(2, 3, &[2.0, 8.0, -1.5, 0.75, -3.0, 5.0]);
    let c = Matrix::from_rows(2, 3, &[-4.0, 1.0, 2.25, 9.0, 0.5, -2.0]);

    // Exact: addition order within each element is fixed
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    assert_eq!(&a + &b, &b + &a);
}

#[test]
fn multiplication_is_associative_within_tolerance() {
    let a = Matrix::from_fn(2, 3, |i, j| (i as f64 + 1.0) * 0.7 - j as f64 * 1.3);
    let b = Matrix::from_fn(3, 4, |i, j| (i as f64 - 1.5) * (j as f64 + 0.5));
    let c = Matrix::from_fn(4, 2, |i, j| i as f64 * 0.25 + j as f64 * 2.0 - 1.0);

    let left = &(&a * &b) * &c;
    let right = &a * &(&b * &c);
    assert_matrix_near(&left, &right, TOL, "(A*B)*C vs A*(B*C)");
}

#[test]
fn scalar_multiplication_commutes_exactly() {
    let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64 * 0.3 - 1.7);
    assert_eq!(2.5 * &m, &m * 2.5);
    assert_eq!(0.0 * &m, Matrix::zeros(3, 3));
}

#[test]
fn multiplication_sum_order_is_reproducible() {
    // Same operands, same result, bit for bit
    let a = Matrix::from_fn(4, 4, |i, j| 1.0 / (1.0 + i as f64 + j as f64));
    let b = Matrix::from_fn(4, 4, |i, j| (i as f64 - j as f64) * 1e-3 + 0.1);
    let first = a.checked_mul(&b).unwrap();
    let second = a.checked_mul(&b).unwrap();
    assert_eq!(first, second);
}

// ── Copy and assignment ─────────────────────────────────────────────

#[test]
fn copies_are_independent() {
    let mut a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let mut b = a.clone();

    b[(0, 0)] = 100.0;
    assert_eq!(a[(0, 0)], 1.0);

    a[(1, 1)] = -4.0;
    assert_eq!(b[(1, 1)], 4.0);
}

#[test]
fn assignment_replaces_shape_and_contents() {
    let src = Matrix::from_rows(3, 1, &[7.0, 8.0, 9.0]);
    let mut dst = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    dst.clone_from(&src);
    assert_eq!(dst.nrows(), 3);
    assert_eq!(dst.ncols(), 1);
    assert_eq!(dst, src);

    // The source is untouched
    assert_eq!(src[(2, 0)], 9.0);
}

#[test]
fn self_assignment_is_a_no_op() {
    let mut a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let snapshot = a.clone();
    a.clone_from(&snapshot);
    assert_eq!(a.nrows(), 2);
    assert_eq!(a.ncols(), 2);
    assert_eq!(a, snapshot);
}

// ── Text I/O ────────────────────────────────────────────────────────

#[test]
fn display_then_read_round_trips() {
    let a = Matrix::from_rows(3, 2, &[1.0, -2.5, 3.125, 40.0, -0.75, 6.0]);
    let text = format!("{}", a);

    let mut b = Matrix::<f64>::zeros(3, 2);
    b.read_from(Cursor::new(text)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn read_failure_leaves_partial_contents() {
    let mut m = Matrix::from_rows(2, 2, &[9.0, 9.0, 9.0, 9.0]);
    assert!(m.read_from(Cursor::new("1 2 bad 4")).is_err());
    // First two elements replaced, the rest untouched
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(0, 1)], 2.0);
    assert_eq!(m[(1, 0)], 9.0);
    assert_eq!(m[(1, 1)], 9.0);
}

// ── Boundaries ──────────────────────────────────────────────────────

#[test]
fn empty_matrices_are_consistent() {
    let a = Matrix::<f64>::zeros(0, 2);
    let b = Matrix::<f64>::zeros(0, 2);

    // Elementwise ops over an empty domain succeed with empty results
    let sum = a.checked_add(&b).unwrap();
    assert_eq!(sum.nrows(), 0);
    assert_eq!(sum.ncols(), 2);

    // Shape rules still apply
    let c = Matrix::<f64>::zeros(0, 3);
    assert!(a.checked_add(&c).is_err());

    // Zero inner dimension: an all-zero result of the outer shape
    let d = Matrix::<f64>::zeros(2, 0);
    let e = Matrix::<f64>::zeros(0, 4);
    let prod = d.checked_mul(&e).unwrap();
    assert_eq!(prod, Matrix::zeros(2, 4));
}

#[test]
fn affine_point_transform() {
    // Homogeneous 2D scale-then-translate applied to a column point,
    // the shape chain the matrix type exists to serve.
    let mut scale = Matrix::<f64>::eye(3);
    scale[(0, 0)] = 2.0;
    scale[(1, 1)] = 3.0;

    let mut translate = Matrix::<f64>::eye(3);
    translate[(0, 2)] = 1.0;
    translate[(1, 2)] = -1.0;

    let point = Matrix::from_rows(3, 1, &[2.0, 2.0, 1.0]);
    let moved = &(&translate * &scale) * &point;

    assert_eq!(moved[(0, 0)], 5.0);
    assert_eq!(moved[(1, 0)], 5.0);
    assert_eq!(moved[(2, 0)], 1.0);
}
