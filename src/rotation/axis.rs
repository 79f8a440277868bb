//! Principal axes and their elementary rotation matrices

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::linalg::{Matrix, Vector};
use crate::EvspaceError;

/// One of the three principal axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis, left unchanged by rotations about it
    pub fn unit_vector(self) -> Vector {
        match self {
            Axis::X => Vector::E1,
            Axis::Y => Vector::E2,
            Axis::Z => Vector::E3,
        }
    }

    /// Elementary right-handed rotation matrix about this axis
    ///
    /// The angle is in radians and is used as given, without range reduction.
    ///
    /// ```rust
    /// use evspace::rotation::Axis;
    ///
    /// assert_eq!(Axis::Z.rotation_matrix(0.0), evspace::Matrix::identity());
    /// ```
    pub fn rotation_matrix(self, angle: f64) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        match self {
            Axis::X => Matrix::new([[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]]),
            Axis::Y => Matrix::new([[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]]),
            Axis::Z => Matrix::new([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]]),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

impl TryFrom<char> for Axis {
    type Error = EvspaceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Axis::X),
            'Y' => Ok(Axis::Y),
            'Z' => Ok(Axis::Z),
            other => Err(EvspaceError::ParseError(format!("Unknown axis '{}'", other))),
        }
    }
}

impl FromStr for Axis {
    type Err = EvspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Axis::try_from(c),
            _ => Err(EvspaceError::ParseError(format!("Unknown axis '{}'", s))),
        }
    }
}

/// Elementary rotation matrix about `axis` by `angle` radians
pub fn derive_axis_rotation(axis: Axis, angle: f64) -> Matrix {
    axis.rotation_matrix(angle)
}
