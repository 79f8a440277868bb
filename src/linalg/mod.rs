//! Fixed-size linear algebra: 3-component vectors and 3x3 matrices
//!
//! `Matrix` wraps `nalgebra::Matrix3<f64>`; `Vector` converts to and from
//! `nalgebra::Vector3<f64>`, which is the only view the matrix-vector
//! products use.

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
