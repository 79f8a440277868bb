//! 3x3 matrix backed by `nalgebra::Matrix3<f64>`
//!
//! Elements are addressed as `(row, column)`. Constructors taking flat input
//! read it in row-major order, regardless of nalgebra's column-major storage.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra::Matrix3;

use super::Vector;
use crate::constants::{DEFAULT_ABS_TOL, DEFAULT_MAX_ULPS, DEFAULT_REL_TOL, DIM};
use crate::{EvspaceError, Result};

/// A 3x3 matrix of `f64`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix(Matrix3<f64>);

impl Matrix {
    /// Creates a matrix from nested rows
    ///
    /// ```rust
    /// use evspace::linalg::Matrix;
    ///
    /// let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(2, 0)], 7.0);
    /// ```
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Matrix(Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2], rows[1][0], rows[1][1], rows[1][2], rows[2][0],
            rows[2][1], rows[2][2],
        ))
    }

    /// Creates a matrix from 9 row-major values
    ///
    /// # Errors
    ///
    /// [`EvspaceError::InvalidLength`] unless exactly 9 values are given.
    pub fn from_row_slice(values: &[f64]) -> Result<Self> {
        if values.len() != DIM * DIM {
            return Err(EvspaceError::InvalidLength {
                expected: DIM * DIM,
                actual: values.len(),
            });
        }
        Ok(Matrix(Matrix3::from_row_slice(values)))
    }

    /// Creates a matrix whose rows are the given vectors
    pub fn from_rows(rows: [Vector; 3]) -> Self {
        Matrix::new([rows[0].to_array(), rows[1].to_array(), rows[2].to_array()])
    }

    /// The zero matrix
    pub fn zeros() -> Self {
        Matrix(Matrix3::zeros())
    }

    /// A fresh identity matrix
    pub fn identity() -> Self {
        Matrix(Matrix3::identity())
    }

    fn check(row: usize, col: usize) -> Result<(usize, usize)> {
        if row >= DIM || col >= DIM {
            Err(EvspaceError::MatrixIndexOutOfRange { row, col })
        } else {
            Ok((row, col))
        }
    }

    /// Returns the element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        Ok(self[Self::check(row, col)?])
    }

    /// Replaces the element at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let index = Self::check(row, col)?;
        self[index] = value;
        Ok(())
    }

    /// Returns row `index` as a vector
    pub fn row(&self, index: usize) -> Result<Vector> {
        let (row, _) = Self::check(index, 0)?;
        Ok(Vector::new(self.0[(row, 0)], self.0[(row, 1)], self.0[(row, 2)]))
    }

    /// Returns column `index` as a vector
    pub fn column(&self, index: usize) -> Result<Vector> {
        let (_, col) = Self::check(0, index)?;
        Ok(Vector::new(self.0[(0, col)], self.0[(1, col)], self.0[(2, col)]))
    }

    /// Returns the elements as nested rows
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        let m = &self.0;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    pub fn transpose(&self) -> Matrix {
        Matrix(self.0.transpose())
    }

    pub fn transpose_mut(&mut self) -> &mut Self {
        self.0.transpose_mut();
        self
    }

    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    /// Returns the inverse matrix
    ///
    /// # Errors
    ///
    /// [`EvspaceError::SingularMatrix`] when the determinant is exactly zero.
    ///
    /// ```rust
    /// use evspace::linalg::Matrix;
    ///
    /// let singular = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// assert!(singular.inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<Matrix> {
        self.0
            .try_inverse()
            .map(Matrix)
            .ok_or(EvspaceError::SingularMatrix)
    }

    /// True when `Mᵗ·M` is the identity and the determinant is 1, within `epsilon`
    pub fn is_orthonormal(&self, epsilon: f64) -> bool {
        let product = self.transpose() * *self;
        product.abs_diff_eq(&Matrix::identity(), epsilon)
            && (self.determinant() - 1.0).abs() <= epsilon
    }

    /// ULP based equality; each element may differ by at most `max_ulps`
    pub fn compare_to(&self, other: &Matrix, max_ulps: u32) -> bool {
        self.ulps_eq(other, 0.0, max_ulps)
    }

    /// Tolerance based equality combining relative and absolute error
    pub fn almost_eq(&self, other: &Matrix, rel_tol: f64, abs_tol: f64) -> bool {
        self.relative_eq(other, abs_tol, rel_tol)
    }

    /// [`Matrix::almost_eq`] with the crate default tolerances
    pub fn is_close(&self, other: &Matrix) -> bool {
        self.almost_eq(other, DEFAULT_REL_TOL, DEFAULT_ABS_TOL)
    }

    /// Borrows the underlying nalgebra matrix
    pub fn as_matrix3(&self) -> &Matrix3<f64> {
        &self.0
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::zeros()
    }
}

impl From<Matrix3<f64>> for Matrix {
    fn from(m: Matrix3<f64>) -> Self {
        Matrix(m)
    }
}

impl From<Matrix> for Matrix3<f64> {
    fn from(m: Matrix) -> Self {
        m.0
    }
}

impl From<[[f64; 3]; 3]> for Matrix {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Matrix::new(rows)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < DIM && col < DIM,
            "Matrix index ({}, {}) out of range",
            row,
            col
        );
        &self.0[(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < DIM && col < DIM,
            "Matrix index ({}, {}) out of range",
            row,
            col
        );
        &mut self.0[(row, col)]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.to_rows();
        writeln!(f, "[ [ {}, {}, {} ]", rows[0][0], rows[0][1], rows[0][2])?;
        writeln!(f, "  [ {}, {}, {} ]", rows[1][0], rows[1][1], rows[1][2])?;
        write!(f, "  [ {}, {}, {} ] ]", rows[2][0], rows[2][1], rows[2][2])
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        Matrix(self.0 + rhs.0)
    }
}

impl AddAssign for Matrix {
    fn add_assign(&mut self, rhs: Matrix) {
        self.0 += rhs.0;
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Matrix {
        Matrix(self.0 - rhs.0)
    }
}

impl SubAssign for Matrix {
    fn sub_assign(&mut self, rhs: Matrix) {
        self.0 -= rhs.0;
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        Matrix(-self.0)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        Matrix(self.0 * scalar)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: Matrix) -> Matrix {
        matrix * self
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, scalar: f64) {
        self.0 *= scalar;
    }
}

impl Div<f64> for Matrix {
    type Output = Matrix;

    fn div(self, scalar: f64) -> Matrix {
        Matrix(self.0 / scalar)
    }
}

impl DivAssign<f64> for Matrix {
    fn div_assign(&mut self, scalar: f64) {
        self.0 /= scalar;
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix(self.0 * rhs.0)
    }
}

impl MulAssign for Matrix {
    fn mul_assign(&mut self, rhs: Matrix) {
        self.0 *= rhs.0;
    }
}

/// Column vector product, `M·v`
impl Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        Vector::from_vector3(self.0 * vector.to_vector3())
    }
}

/// Row vector product, `v·M` (equivalently `Mᵗ·v`)
impl Mul<Matrix> for Vector {
    type Output = Vector;

    fn mul(self, matrix: Matrix) -> Vector {
        Vector::from_vector3(matrix.0.tr_mul(&self.to_vector3()))
    }
}

impl MulAssign<Matrix> for Vector {
    fn mul_assign(&mut self, matrix: Matrix) {
        *self = *self * matrix;
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl UlpsEq for Matrix {
    fn default_max_ulps() -> u32 {
        DEFAULT_MAX_ULPS
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}
