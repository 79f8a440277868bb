//! Euler angle triples
//!
//! An `EulerAngles` value holds three angles in radians, bound by position to
//! the three axes of whichever [`RotationOrder`](super::RotationOrder) it is
//! used with. It is a plain value: changing it does not update any matrix on
//! its own. Only [`ReferenceFrame`](crate::framelib::ReferenceFrame) keeps a
//! derived matrix in sync with its angles.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::constants::{DEG2RAD, RAD2DEG};
use crate::{check_index, Result};

/// Three Euler angles (alpha, beta, gamma) in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct EulerAngles {
    values: [f64; 3],
}

impl EulerAngles {
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        EulerAngles {
            values: [alpha, beta, gamma],
        }
    }

    /// Builds angles from values given in degrees
    ///
    /// ```rust
    /// use evspace::EulerAngles;
    ///
    /// let angles = EulerAngles::from_degrees(90.0, 0.0, 180.0);
    /// assert!((angles.alpha() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    /// ```
    pub fn from_degrees(alpha: f64, beta: f64, gamma: f64) -> Self {
        EulerAngles::new(alpha * DEG2RAD, beta * DEG2RAD, gamma * DEG2RAD)
    }

    /// The angles converted to degrees
    pub fn to_degrees(&self) -> [f64; 3] {
        self.values.map(|angle| angle * RAD2DEG)
    }

    pub fn alpha(&self) -> f64 {
        self.values[0]
    }

    pub fn beta(&self) -> f64 {
        self.values[1]
    }

    pub fn gamma(&self) -> f64 {
        self.values[2]
    }

    /// Angle at `index`, failing for `index > 2`
    pub fn get(&self, index: usize) -> Result<f64> {
        Ok(self.values[check_index(index)?])
    }

    /// Replaces the angle at `index`, failing for `index > 2`
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.values[check_index(index)?] = value;
        Ok(())
    }

    pub fn to_array(&self) -> [f64; 3] {
        self.values
    }
}

impl From<[f64; 3]> for EulerAngles {
    fn from(values: [f64; 3]) -> Self {
        EulerAngles { values }
    }
}

impl From<EulerAngles> for [f64; 3] {
    fn from(angles: EulerAngles) -> Self {
        angles.values
    }
}

impl Index<usize> for EulerAngles {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        assert!(index < 3, "Angle index {} out of range", index);
        &self.values[index]
    }
}

impl IndexMut<usize> for EulerAngles {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        assert!(index < 3, "Angle index {} out of range", index);
        &mut self.values[index]
    }
}
