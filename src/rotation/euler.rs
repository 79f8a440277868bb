//! Composition of elementary rotations into a single rotation matrix

use serde::{Deserialize, Serialize};

use super::{Axis, EulerAngles, RotationOrder, RotationType};
use crate::linalg::{Matrix, Vector};

/// Rotation matrix for an Euler sequence
///
/// `a`, `b` and `c` are the angles about the first, second and third axes
/// of `order`. With `M1`, `M2`, `M3` the matching elementary matrices the
/// result is `M1·M2·M3` for intrinsic rotations and `M3·M2·M1` for
/// extrinsic ones.
///
/// The order is not validated and gimbal lock is not detected.
pub fn derive_rotation_matrix(
    order: RotationOrder,
    rotation_type: RotationType,
    a: f64,
    b: f64,
    c: f64,
) -> Matrix {
    let first = order.first.rotation_matrix(a);
    let second = order.second.rotation_matrix(b);
    let third = order.third.rotation_matrix(c);

    match rotation_type {
        RotationType::Intrinsic => first * second * third,
        RotationType::Extrinsic => third * second * first,
    }
}

/// [`derive_rotation_matrix`] taking an [`EulerAngles`] triple
pub fn compute_rotation_matrix(
    order: RotationOrder,
    rotation_type: RotationType,
    angles: &EulerAngles,
) -> Matrix {
    derive_rotation_matrix(
        order,
        rotation_type,
        angles.alpha(),
        angles.beta(),
        angles.gamma(),
    )
}

/// Rotation by `angle` radians about an arbitrary `axis`
///
/// Uses `I + W·sin(θ) + W²·(1 - cos(θ))` where `W` is the cross product
/// matrix of the normalized axis. `axis` must be non-zero.
pub fn derive_rotation_matrix_about(angle: f64, axis: &Vector) -> Matrix {
    let n = axis.norm();
    let w = Matrix::new([[0.0, -n.z, n.y], [n.z, 0.0, -n.x], [-n.y, n.x, 0.0]]);
    let (sin, cos) = angle.sin_cos();

    Matrix::identity() + w * sin + w * w * (1.0 - cos)
}

/// Matrix taking vectors expressed in `from` directly into `to`
///
/// Returns `M_toᵗ·M_from`; apply it with
/// [`rotate_from`](super::exec::rotate_from). Offsets are not part of the
/// matrix. Vector transforms in this crate go through the inertial frame
/// instead, see [`rotate_between`](super::rotate_between).
pub fn derive_rotation_matrix_between(from: &EulerRotation, to: &EulerRotation) -> Matrix {
    to.matrix().transpose() * from.matrix()
}

/// An orientation described by an Euler sequence, its type and its angles
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerRotation {
    pub order: RotationOrder,
    #[serde(default)]
    pub rotation_type: RotationType,
    pub angles: EulerAngles,
}

impl EulerRotation {
    pub fn new(order: RotationOrder, rotation_type: RotationType, angles: EulerAngles) -> Self {
        EulerRotation {
            order,
            rotation_type,
            angles,
        }
    }

    pub fn intrinsic(order: RotationOrder, angles: EulerAngles) -> Self {
        EulerRotation::new(order, RotationType::Intrinsic, angles)
    }

    pub fn extrinsic(order: RotationOrder, angles: EulerAngles) -> Self {
        EulerRotation::new(order, RotationType::Extrinsic, angles)
    }

    /// Freshly derived rotation matrix for this orientation
    pub fn matrix(&self) -> Matrix {
        compute_rotation_matrix(self.order, self.rotation_type, &self.angles)
    }

    /// The same orientation expressed with the opposite rotation type
    ///
    /// Reverses both the axis order and the angles.
    pub fn dual(&self) -> EulerRotation {
        let [a, b, c] = self.angles.to_array();
        EulerRotation::new(
            self.order.reversed(),
            self.rotation_type.flipped(),
            EulerAngles::new(c, b, a),
        )
    }
}

/// Single-axis rotation viewed as an Euler sequence about one axis
impl From<(Axis, f64)> for EulerRotation {
    fn from((axis, angle): (Axis, f64)) -> Self {
        EulerRotation::intrinsic(
            RotationOrder::new(axis, axis, axis),
            EulerAngles::new(angle, 0.0, 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    fn test_angles() -> EulerAngles {
        EulerAngles::new(PI / 6.0, PI / 4.0, PI / 3.0)
    }

    #[test]
    fn test_xyz_intrinsic_matrix() {
        let m =
            compute_rotation_matrix(RotationOrder::XYZ, RotationType::Intrinsic, &test_angles());
        let expected = Matrix::new([
            [0.35355339059327384, -0.6123724356957946, 0.7071067811865475],
            [0.9267766952966369, 0.12682648404432229, -0.35355339059327373],
            [0.12682648404432195, 0.7803300858899106, 0.6123724356957946],
        ]);
        assert_relative_eq!(m, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_multiplication_order() {
        let (a, b, c) = (0.3, -1.1, 2.4);
        let m1 = Axis::Z.rotation_matrix(a);
        let m2 = Axis::X.rotation_matrix(b);
        let m3 = Axis::Y.rotation_matrix(c);

        let order = RotationOrder::ZXY;
        let intrinsic = derive_rotation_matrix(order, RotationType::Intrinsic, a, b, c);
        let extrinsic = derive_rotation_matrix(order, RotationType::Extrinsic, a, b, c);

        assert_eq!(intrinsic, m1 * m2 * m3);
        assert_eq!(extrinsic, m3 * m2 * m1);
        assert!(!intrinsic.is_close(&extrinsic));
    }

    #[test]
    fn test_zero_angles_identity() {
        for order in RotationOrder::ALL {
            for rotation_type in [RotationType::Intrinsic, RotationType::Extrinsic] {
                let m = derive_rotation_matrix(order, rotation_type, 0.0, 0.0, 0.0);
                assert_eq!(m, Matrix::identity(), "{} {}", order, rotation_type);
            }
        }
    }

    #[test]
    fn test_duality_random() {
        let mut rng = StdRng::seed_from_u64(23423);
        for _ in 0..50 {
            let angles = EulerAngles::new(
                rng.gen_range(-PI..PI),
                rng.gen_range(-PI..PI),
                rng.gen_range(-PI..PI),
            );
            for order in RotationOrder::ALL {
                let rotation = EulerRotation::intrinsic(order, angles);
                let dual = rotation.dual();
                assert_eq!(dual.rotation_type, RotationType::Extrinsic);
                assert_relative_eq!(rotation.matrix(), dual.matrix(), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_orthonormal_random() {
        let mut rng = StdRng::seed_from_u64(424243);
        for _ in 0..50 {
            let (a, b, c) = (
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            for order in RotationOrder::ALL {
                for rotation_type in [RotationType::Intrinsic, RotationType::Extrinsic] {
                    let m = derive_rotation_matrix(order, rotation_type, a, b, c);
                    assert!(m.is_orthonormal(1e-12), "{} {}", order, rotation_type);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_order_still_composes() {
        let order = RotationOrder::new(Axis::X, Axis::X, Axis::X);
        let m = derive_rotation_matrix(order, RotationType::Intrinsic, 0.1, 0.2, 0.3);
        assert_relative_eq!(m, Axis::X.rotation_matrix(0.6), epsilon = 1e-14);
    }

    #[test]
    fn test_gimbal_lock_is_not_special_cased() {
        // With a middle angle of π/2 the outer X and Z turns add up
        let locked = |a: f64, c: f64| {
            derive_rotation_matrix(RotationOrder::XYZ, RotationType::Intrinsic, a, PI / 2.0, c)
        };
        let m = locked(0.4, 0.0);
        assert!(m.is_orthonormal(1e-12));
        assert_relative_eq!(m, locked(0.0, 0.4), epsilon = 1e-12);
        assert_relative_eq!(m, locked(0.1, 0.3), epsilon = 1e-12);
        assert!(!m.is_close(&locked(0.0, -0.4)));
    }

    #[test]
    fn test_about_basis_axes_matches_elementary() {
        let angle = PI / 4.0;
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let about = derive_rotation_matrix_about(angle, &axis.unit_vector());
            assert_relative_eq!(about, axis.rotation_matrix(angle), epsilon = 1e-14);
        }

        // Axis length does not matter
        let scaled = derive_rotation_matrix_about(angle, &(Vector::E3 * 4.0));
        assert_relative_eq!(scaled, Axis::Z.rotation_matrix(angle), epsilon = 1e-14);
    }

    #[test]
    fn test_about_arbitrary_axis() {
        let axis = Vector::new(1.0, 1.0, 1.0);
        let m = derive_rotation_matrix_about(2.0 * PI / 3.0, &axis);

        // A third of a turn about the diagonal cycles the basis vectors
        assert_relative_eq!(m * Vector::E1, Vector::E2, epsilon = 1e-14);
        assert_relative_eq!(m * Vector::E2, Vector::E3, epsilon = 1e-14);
        assert_relative_eq!(m * axis, axis, epsilon = 1e-14);
        assert!(m.is_orthonormal(1e-12));
    }

    #[test]
    fn test_between_matrix() {
        let from = EulerRotation::intrinsic(RotationOrder::XYZ, test_angles());
        let to = EulerRotation::intrinsic(
            RotationOrder::YXY,
            EulerAngles::new(0.0, PI / 4.0, PI / 2.0),
        );
        let m = derive_rotation_matrix_between(&from, &to);

        let v = Vector::new(1.0, 2.0, 3.0);
        assert_relative_eq!(
            m * v,
            Vector::new(-2.4075815434782335, 2.5769611828652055, 1.2501288627613274),
            epsilon = 1e-12
        );
        assert!(m.is_orthonormal(1e-12));
    }

    #[test]
    fn test_from_single_axis() {
        let rotation = EulerRotation::from((Axis::Y, 0.7));
        assert_relative_eq!(rotation.matrix(), Axis::Y.rotation_matrix(0.7), epsilon = 1e-15);
    }

    #[test]
    fn test_serde_defaults_to_intrinsic() {
        let rotation: EulerRotation =
            serde_json::from_str(r#"{"order": "ZXZ", "angles": [0.1, 0.2, 0.3]}"#).unwrap();
        assert_eq!(rotation.order, RotationOrder::ZXZ);
        assert_eq!(rotation.rotation_type, RotationType::Intrinsic);
        assert_eq!(rotation.angles, EulerAngles::new(0.1, 0.2, 0.3));
    }
}
