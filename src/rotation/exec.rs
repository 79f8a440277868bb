//! Applying a rotation matrix (and an origin offset) to a vector
//!
//! `rotate_from` takes a vector expressed in the rotated frame back into the
//! reference frame; `rotate_to` is its inverse. Offsets are always given in
//! the reference basis.

use crate::linalg::{Matrix, Vector};

/// Reference frame to rotated frame: `v·M`, equivalently `Mᵗ·v`
pub fn rotate_to(matrix: &Matrix, vector: &Vector) -> Vector {
    *vector * *matrix
}

/// Rotated frame to reference frame: `M·v`
pub fn rotate_from(matrix: &Matrix, vector: &Vector) -> Vector {
    *matrix * *vector
}

/// Removes `offset` before rotating into the frame: `(v - o)·M`
pub fn rotate_to_with_offset(matrix: &Matrix, vector: &Vector, offset: &Vector) -> Vector {
    (*vector - *offset) * *matrix
}

/// Rotates out of the frame then translates by `offset`: `M·v + o`
pub fn rotate_from_with_offset(matrix: &Matrix, vector: &Vector, offset: &Vector) -> Vector {
    *matrix * *vector + *offset
}
