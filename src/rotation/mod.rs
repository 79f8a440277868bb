//! Euler-angle rotations
//!
//! The building blocks, from the bottom up:
//!
//! - [`Axis`] and its elementary rotation matrices
//! - [`RotationOrder`] and [`RotationType`], which together say how three
//!   elementary rotations compose
//! - [`EulerAngles`], the three angles bound to an order's axes
//! - [`EulerRotation`], a complete orientation, and the composer functions
//!   that turn it into a [`Matrix`](crate::Matrix)
//! - the [`exec`] primitives that apply a matrix to a [`Vector`]
//!
//! The free functions in this module wire those together for callers who do
//! not want to keep a [`ReferenceFrame`](crate::ReferenceFrame) around. Each
//! call derives its matrix from scratch.

pub mod angles;
pub mod axis;
pub mod euler;
pub mod exec;
pub mod order;

pub use angles::EulerAngles;
pub use axis::{derive_axis_rotation, Axis};
pub use euler::{
    compute_rotation_matrix, derive_rotation_matrix, derive_rotation_matrix_about,
    derive_rotation_matrix_between, EulerRotation,
};
pub use exec::{rotate_from, rotate_from_with_offset, rotate_to, rotate_to_with_offset};
pub use order::{RotationOrder, RotationType};

use crate::linalg::Vector;

/// Rotates `vector` into a frame turned by `angle` about `axis`
pub fn rotate_to_axis(axis: Axis, angle: f64, vector: &Vector) -> Vector {
    rotate_to(&axis.rotation_matrix(angle), vector)
}

/// Rotates `vector` out of a frame turned by `angle` about `axis`
pub fn rotate_from_axis(axis: Axis, angle: f64, vector: &Vector) -> Vector {
    rotate_from(&axis.rotation_matrix(angle), vector)
}

pub fn rotate_to_axis_with_offset(
    axis: Axis,
    angle: f64,
    vector: &Vector,
    offset: &Vector,
) -> Vector {
    rotate_to_with_offset(&axis.rotation_matrix(angle), vector, offset)
}

pub fn rotate_from_axis_with_offset(
    axis: Axis,
    angle: f64,
    vector: &Vector,
    offset: &Vector,
) -> Vector {
    rotate_from_with_offset(&axis.rotation_matrix(angle), vector, offset)
}

/// Rotates `vector` into the frame described by an Euler sequence
pub fn rotate_to_euler(
    order: RotationOrder,
    rotation_type: RotationType,
    angles: &EulerAngles,
    vector: &Vector,
) -> Vector {
    rotate_to(&compute_rotation_matrix(order, rotation_type, angles), vector)
}

/// Rotates `vector` out of the frame described by an Euler sequence
pub fn rotate_from_euler(
    order: RotationOrder,
    rotation_type: RotationType,
    angles: &EulerAngles,
    vector: &Vector,
) -> Vector {
    rotate_from(&compute_rotation_matrix(order, rotation_type, angles), vector)
}

pub fn rotate_to_euler_with_offset(
    order: RotationOrder,
    rotation_type: RotationType,
    angles: &EulerAngles,
    vector: &Vector,
    offset: &Vector,
) -> Vector {
    let matrix = compute_rotation_matrix(order, rotation_type, angles);
    rotate_to_with_offset(&matrix, vector, offset)
}

pub fn rotate_from_euler_with_offset(
    order: RotationOrder,
    rotation_type: RotationType,
    angles: &EulerAngles,
    vector: &Vector,
    offset: &Vector,
) -> Vector {
    let matrix = compute_rotation_matrix(order, rotation_type, angles);
    rotate_from_with_offset(&matrix, vector, offset)
}

/// Moves `vector` from one rotated frame into another
///
/// The vector is rotated out of `from` into the inertial frame, then into
/// `to`. Neither frame has an offset.
pub fn rotate_between(from: &EulerRotation, to: &EulerRotation, vector: &Vector) -> Vector {
    let inertial = rotate_from(&from.matrix(), vector);
    rotate_to(&to.matrix(), &inertial)
}

/// [`rotate_between`] for frames whose origins are offset from the inertial
/// origin
///
/// Pass [`Vector::zeros`] for a frame that shares the inertial origin.
///
/// ```rust
/// use evspace::rotation::{rotate_between_with_offsets, EulerRotation};
/// use evspace::{EulerAngles, RotationOrder, Vector};
///
/// let from = EulerRotation::intrinsic(RotationOrder::XYZ, EulerAngles::default());
/// let to = EulerRotation::intrinsic(RotationOrder::ZXZ, EulerAngles::default());
/// let moved = rotate_between_with_offsets(
///     &from,
///     &to,
///     &Vector::new(1.0, 1.0, 1.0),
///     &Vector::new(1.0, 0.0, 0.0),
///     &Vector::new(0.0, 0.0, 1.0),
/// );
/// assert_eq!(moved, Vector::new(2.0, 1.0, 0.0));
/// ```
pub fn rotate_between_with_offsets(
    from: &EulerRotation,
    to: &EulerRotation,
    vector: &Vector,
    offset_from: &Vector,
    offset_to: &Vector,
) -> Vector {
    let inertial = rotate_from_with_offset(&from.matrix(), vector, offset_from);
    rotate_to_with_offset(&to.matrix(), &inertial, offset_to)
}
