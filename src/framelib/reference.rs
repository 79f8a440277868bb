//! Rotated and translated reference frames
//!
//! A [`ReferenceFrame`] is an orientation (an [`EulerRotation`]) plus an
//! origin offset, both described relative to the inertial frame. It caches
//! the rotation matrix for its angles and rebuilds it whenever the angles
//! change, so the cached matrix is never stale.
//!
//! Vectors are moved between two frames by going through the inertial frame:
//! out of the source with `rotate_from`, then into the target with
//! `rotate_to`.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::constants::DEG2RAD;
use crate::linalg::{Matrix, Vector};
use crate::rotation::{
    rotate_from, rotate_from_with_offset, rotate_to, rotate_to_with_offset, EulerAngles,
    EulerRotation, RotationOrder, RotationType,
};
use crate::{check_index, Result};

/// Serialized form of a [`ReferenceFrame`]
///
/// ```json
/// { "order": "ZXZ", "rotation_type": "extrinsic", "angles": [10, 20, 30],
///   "offset": [1, 0, 0], "degrees": true }
/// ```
///
/// Only `order` and `angles` are required. `rotation_type` defaults to
/// intrinsic, `offset` to the zero vector and `degrees` to false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameDefinition {
    pub order: RotationOrder,
    #[serde(default)]
    pub rotation_type: RotationType,
    pub angles: EulerAngles,
    #[serde(default)]
    pub offset: Vector,
    #[serde(default)]
    pub degrees: bool,
}

impl FrameDefinition {
    /// Angles in radians, converting if the definition is in degrees
    pub fn angles_radians(&self) -> EulerAngles {
        if self.degrees {
            EulerAngles::from(self.angles.to_array().map(|angle| angle * DEG2RAD))
        } else {
            self.angles
        }
    }
}

/// A frame rotated by Euler angles and offset from the inertial origin
///
/// There is no default constructor: a frame always has an orientation, and
/// its matrix is derived as soon as it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FrameDefinition", into = "FrameDefinition")]
pub struct ReferenceFrame {
    rotation: EulerRotation,
    offset: Vector,
    matrix: Matrix,
}

impl ReferenceFrame {
    /// Creates a frame sharing the inertial origin
    pub fn new(order: RotationOrder, rotation_type: RotationType, angles: EulerAngles) -> Self {
        ReferenceFrame::with_offset(order, rotation_type, angles, Vector::zeros())
    }

    /// Creates a frame whose origin sits at `offset` in the inertial basis
    pub fn with_offset(
        order: RotationOrder,
        rotation_type: RotationType,
        angles: EulerAngles,
        offset: Vector,
    ) -> Self {
        ReferenceFrame::from_rotation(EulerRotation::new(order, rotation_type, angles), offset)
    }

    pub fn from_rotation(rotation: EulerRotation, offset: Vector) -> Self {
        ReferenceFrame {
            rotation,
            offset,
            matrix: rotation.matrix(),
        }
    }

    /// The inertial frame itself: no rotation and no offset
    pub fn inertial() -> Self {
        ReferenceFrame::new(
            RotationOrder::default(),
            RotationType::default(),
            EulerAngles::default(),
        )
    }

    pub fn order(&self) -> RotationOrder {
        self.rotation.order
    }

    pub fn rotation_type(&self) -> RotationType {
        self.rotation.rotation_type
    }

    pub fn rotation(&self) -> EulerRotation {
        self.rotation
    }

    pub fn angles(&self) -> EulerAngles {
        self.rotation.angles
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Cached rotation matrix, always consistent with [`angles`](Self::angles)
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// Angle at `index`
    pub fn angle(&self, index: usize) -> Result<f64> {
        self.rotation.angles.get(index)
    }

    /// Replaces all three angles and rebuilds the matrix
    pub fn set_angles(&mut self, angles: EulerAngles) {
        self.rotation.angles = angles;
        self.update_matrix();
    }

    /// Replaces one angle and rebuilds the matrix
    ///
    /// Fails for `index > 2`, leaving the frame untouched.
    pub fn set_angle(&mut self, index: usize, value: f64) -> Result<()> {
        let index = check_index(index)?;
        self.rotation.angles[index] = value;
        self.update_matrix();
        Ok(())
    }

    /// Moves the origin. The matrix does not depend on it.
    pub fn set_offset(&mut self, offset: Vector) {
        self.offset = offset;
    }

    fn update_matrix(&mut self) {
        self.matrix = self.rotation.matrix();
        log::trace!(
            "Recomputed {} {} frame matrix for angles {:?}",
            self.rotation.order,
            self.rotation.rotation_type,
            self.rotation.angles.to_array()
        );
    }

    /// Inertial vector into this frame, removing the offset first
    pub fn rotate_to(&self, vector: &Vector) -> Vector {
        rotate_to_with_offset(&self.matrix, vector, &self.offset)
    }

    /// Vector in this frame out to the inertial frame, adding the offset
    pub fn rotate_from(&self, vector: &Vector) -> Vector {
        rotate_from_with_offset(&self.matrix, vector, &self.offset)
    }

    /// Like [`rotate_to`](Self::rotate_to) but ignoring the offset
    ///
    /// Use this for directions (velocities, unit vectors) rather than
    /// positions.
    pub fn rotate_direction_to(&self, vector: &Vector) -> Vector {
        rotate_to(&self.matrix, vector)
    }

    /// Like [`rotate_from`](Self::rotate_from) but ignoring the offset
    pub fn rotate_direction_from(&self, vector: &Vector) -> Vector {
        rotate_from(&self.matrix, vector)
    }

    /// Vector in this frame into `target`, through the inertial frame
    pub fn rotate_to_frame(&self, target: &ReferenceFrame, vector: &Vector) -> Vector {
        target.rotate_to(&self.rotate_from(vector))
    }

    /// Vector in `source` into this frame, through the inertial frame
    pub fn rotate_from_frame(&self, source: &ReferenceFrame, vector: &Vector) -> Vector {
        source.rotate_to_frame(self, vector)
    }
}

impl Index<usize> for ReferenceFrame {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.rotation.angles[index]
    }
}

impl From<FrameDefinition> for ReferenceFrame {
    fn from(definition: FrameDefinition) -> Self {
        ReferenceFrame::with_offset(
            definition.order,
            definition.rotation_type,
            definition.angles_radians(),
            definition.offset,
        )
    }
}

impl From<ReferenceFrame> for FrameDefinition {
    fn from(frame: ReferenceFrame) -> Self {
        FrameDefinition {
            order: frame.rotation.order,
            rotation_type: frame.rotation.rotation_type,
            angles: frame.rotation.angles,
            offset: frame.offset,
            degrees: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::compute_rotation_matrix;
    use crate::EvspaceError;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    fn body_frame() -> ReferenceFrame {
        ReferenceFrame::new(
            RotationOrder::XYZ,
            RotationType::Intrinsic,
            EulerAngles::new(PI / 6.0, PI / 4.0, PI / 3.0),
        )
    }

    fn v() -> Vector {
        Vector::new(1.0, 2.0, 3.0)
    }

    fn assert_cache_consistent(frame: &ReferenceFrame) {
        let expected =
            compute_rotation_matrix(frame.order(), frame.rotation_type(), &frame.angles());
        assert_eq!(frame.matrix(), expected);
    }

    #[test]
    fn test_construction() {
        let frame = body_frame();
        assert_eq!(frame.order(), RotationOrder::XYZ);
        assert_eq!(frame.rotation_type(), RotationType::Intrinsic);
        assert_eq!(frame.offset(), Vector::zeros());
        assert_eq!(frame.angle(1).unwrap(), PI / 4.0);
        assert_eq!(frame[2], PI / 3.0);
        assert_cache_consistent(&frame);

        let inertial = ReferenceFrame::inertial();
        assert_eq!(inertial.matrix(), Matrix::identity());
        assert_eq!(inertial.rotate_to(&v()), v());
    }

    #[test]
    fn test_rotate_to_and_from() {
        let frame = body_frame();
        let rotated = frame.rotate_to(&v());
        assert_relative_eq!(
            rotated,
            Vector::new(2.587586233319513, 1.9822707900625822, 1.8371173070873836),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            frame.rotate_from(&v()),
            Vector::new(1.2501288627613274, 0.11976949160546013, 3.524603962911527),
            epsilon = 1e-12
        );
        assert_relative_eq!(frame.rotate_from(&rotated), v(), epsilon = 1e-12);
    }

    #[test]
    fn test_offset_transforms() {
        let mut frame = body_frame();
        frame.set_offset(Vector::new(10.0, 20.0, 30.0));
        let matrix_before = frame.matrix();

        assert_relative_eq!(
            frame.rotate_to(&v()),
            Vector::new(-23.28827609987562, -17.840437110563236, -16.534055763786455),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            frame.rotate_from(&v()),
            Vector::new(11.250128862761327, 20.11976949160546, 33.52460396291153),
            epsilon = 1e-12
        );
        assert_eq!(frame.matrix(), matrix_before);

        // Directions ignore the origin
        assert_relative_eq!(
            frame.rotate_direction_to(&v()),
            Vector::new(2.587586233319513, 1.9822707900625822, 1.8371173070873836),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            frame.rotate_direction_from(&frame.rotate_direction_to(&v())),
            v(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_set_angles_keeps_cache_consistent() {
        let mut rng = StdRng::seed_from_u64(1357);
        let mut frame = body_frame();

        for _ in 0..50 {
            let angles = EulerAngles::new(
                rng.gen_range(-PI..PI),
                rng.gen_range(-PI..PI),
                rng.gen_range(-PI..PI),
            );
            frame.set_angles(angles);
            assert_eq!(frame.angles(), angles);
            assert_cache_consistent(&frame);

            let index = rng.gen_range(0..3);
            frame.set_angle(index, rng.gen_range(-PI..PI)).unwrap();
            assert_cache_consistent(&frame);
        }
    }

    #[test]
    fn test_set_angle_out_of_range_leaves_frame() {
        let mut frame = body_frame();
        let before = frame.clone();

        assert!(matches!(
            frame.set_angle(3, 1.0),
            Err(EvspaceError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(frame, before);
        assert!(frame.angle(7).is_err());
    }

    #[test]
    #[should_panic(expected = "Angle index 3 out of range")]
    fn test_index_panics_past_end() {
        let frame = body_frame();
        let _ = frame[3];
    }

    #[test]
    fn test_returned_values_are_copies() {
        let frame = body_frame();
        let mut angles = frame.angles();
        angles[0] = 2.0;
        let mut matrix = frame.matrix();
        matrix[(0, 0)] = 5.0;

        assert_eq!(frame[0], PI / 6.0);
        assert_cache_consistent(&frame);
    }

    #[test]
    fn test_cross_frame_transform() {
        let from = body_frame();
        let to = ReferenceFrame::new(
            RotationOrder::YXY,
            RotationType::Intrinsic,
            EulerAngles::new(0.0, PI / 4.0, PI / 2.0),
        );

        let moved = from.rotate_to_frame(&to, &v());
        assert_relative_eq!(
            moved,
            Vector::new(-2.4075815434782335, 2.5769611828652055, 1.2501288627613274),
            epsilon = 1e-12
        );
        assert_relative_eq!(from.rotate_from_frame(&to, &moved), v(), epsilon = 1e-12);
        assert_relative_eq!(to.rotate_from_frame(&from, &v()), moved, epsilon = 1e-15);
    }

    #[test]
    fn test_cross_frame_with_offsets() {
        let mut from = body_frame();
        from.set_offset(Vector::new(10.0, 20.0, 30.0));
        let to = ReferenceFrame::with_offset(
            RotationOrder::YXY,
            RotationType::Intrinsic,
            EulerAngles::new(0.0, PI / 4.0, PI / 2.0),
            Vector::new(100.0, 200.0, 300.0),
        );

        let moved = from.rotate_to_frame(&to, &v());
        assert_relative_eq!(
            moved,
            Vector::new(61.23202876331102, -315.6210903510812, -88.74987113723867),
            epsilon = 1e-10
        );
        assert_relative_eq!(from.rotate_from_frame(&to, &moved), v(), epsilon = 1e-10);
    }

    #[test]
    fn test_extrinsic_frame() {
        let mut frame = ReferenceFrame::new(
            RotationOrder::ZYX,
            RotationType::Extrinsic,
            EulerAngles::new(PI / 3.0, PI / 4.0, PI / 6.0),
        );
        assert_eq!(frame.rotation_type(), RotationType::Extrinsic);
        assert_cache_consistent(&frame);

        // Same orientation as the intrinsic body frame
        assert_relative_eq!(frame.matrix(), body_frame().matrix(), epsilon = 1e-12);
        assert_relative_eq!(
            frame.rotate_to(&v()),
            Vector::new(2.587586233319513, 1.9822707900625822, 1.8371173070873836),
            epsilon = 1e-12
        );

        let mut to = ReferenceFrame::new(
            RotationOrder::YXY,
            RotationType::Intrinsic,
            EulerAngles::new(0.0, PI / 4.0, PI / 2.0),
        );
        assert_relative_eq!(
            frame.rotate_to_frame(&to, &v()),
            Vector::new(-2.4075815434782335, 2.5769611828652055, 1.2501288627613274),
            epsilon = 1e-12
        );

        frame.set_offset(Vector::new(10.0, 20.0, 30.0));
        to.set_offset(Vector::new(100.0, 200.0, 300.0));
        let moved = frame.rotate_to_frame(&to, &v());
        assert_relative_eq!(
            moved,
            Vector::new(61.23202876331102, -315.6210903510812, -88.74987113723867),
            epsilon = 1e-10
        );
        assert_relative_eq!(frame.rotate_from_frame(&to, &moved), v(), epsilon = 1e-10);

        let mut rng = StdRng::seed_from_u64(97531);
        for _ in 0..50 {
            frame.set_angles(EulerAngles::new(
                rng.gen_range(-PI..PI),
                rng.gen_range(-PI..PI),
                rng.gen_range(-PI..PI),
            ));
            assert_cache_consistent(&frame);

            frame.set_angle(rng.gen_range(0..3), rng.gen_range(-PI..PI)).unwrap();
            assert_cache_consistent(&frame);
            assert_eq!(frame.rotation_type(), RotationType::Extrinsic);
        }
    }

    #[test]
    fn test_to_inertial_frame() {
        let frame = body_frame();
        let inertial = ReferenceFrame::inertial();
        assert_relative_eq!(
            frame.rotate_to_frame(&inertial, &v()),
            frame.rotate_from(&v()),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_serde_definition() {
        let json = r#"{"order": "XYZ", "angles": [30.0, 45.0, 60.0], "degrees": true,
                       "offset": [10.0, 20.0, 30.0]}"#;
        let frame: ReferenceFrame = serde_json::from_str(json).unwrap();

        assert_eq!(frame.rotation_type(), RotationType::Intrinsic);
        assert_relative_eq!(frame.angle(0).unwrap(), PI / 6.0, epsilon = 1e-15);
        assert_cache_consistent(&frame);
        assert_relative_eq!(
            frame.rotate_to(&v()),
            Vector::new(-23.28827609987562, -17.840437110563236, -16.534055763786455),
            epsilon = 1e-10
        );

        let written = serde_json::to_value(&frame).unwrap();
        assert_eq!(written["order"], "XYZ");
        assert_eq!(written["rotation_type"], "intrinsic");
        assert_eq!(written["degrees"], false);

        let reread: ReferenceFrame = serde_json::from_value(written).unwrap();
        assert_eq!(reread, frame);
    }

    #[test]
    fn test_serde_rejects_bad_order() {
        let json = r#"{"order": "XY", "angles": [0.0, 0.0, 0.0]}"#;
        assert!(serde_json::from_str::<ReferenceFrame>(json).is_err());
    }
}
