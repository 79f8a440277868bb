//! # Vector Module
//!
//! This module provides the 3-component `Vector` that every rotation in the
//! crate operates on.
//!
//! ## Design Philosophy
//!
//! `Vector` is a plain `Copy` value: assigning or passing it produces an
//! independent copy, and vectors returned from a
//! [`ReferenceFrame`](crate::framelib::ReferenceFrame) never alias frame state.
//!
//! ## Coordinate System Convention
//!
//! Components are stored in a right-handed Cartesian basis:
//! - **x**: first basis vector `e1`
//! - **y**: second basis vector `e2`
//! - **z**: third basis vector `e3`
//!
//! ## Equality
//!
//! - `==` is exact, component by component
//! - [`Vector::compare_to`] accepts a maximum ULP distance
//! - [`Vector::almost_eq`] combines relative and absolute tolerances
//! - The `approx` traits are implemented, so `assert_relative_eq!` works
//!
//! ## Examples
//!
//! ```rust
//! use evspace::linalg::Vector;
//!
//! let x_axis = Vector::E1;
//! let y_axis = Vector::E2;
//!
//! // Right-hand rule
//! assert_eq!(x_axis.cross(&y_axis), Vector::E3);
//! assert_eq!(x_axis.dot(&y_axis), 0.0);
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::{DEFAULT_ABS_TOL, DEFAULT_MAX_ULPS, DEFAULT_REL_TOL};
use crate::{check_index, Result};

/// Three-dimensional vector
///
/// Represents a point, direction or offset in a 3D Cartesian basis. The
/// interpretation (position, direction, velocity) depends on the caller.
///
/// # Storage Strategy
///
/// - Each component stored as `f64`
/// - No implicit normalization
/// - Serialized as a `[x, y, z]` array
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector {
    /// First component
    pub x: f64,
    /// Second component
    pub y: f64,
    /// Third component
    pub z: f64,
}

impl Vector {
    /// Unit vector along the first axis
    pub const E1: Vector = Vector { x: 1.0, y: 0.0, z: 0.0 };
    /// Unit vector along the second axis
    pub const E2: Vector = Vector { x: 0.0, y: 1.0, z: 0.0 };
    /// Unit vector along the third axis
    pub const E3: Vector = Vector { x: 0.0, y: 0.0, z: 1.0 };

    /// Creates a new vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evspace::linalg::Vector;
    ///
    /// let v = Vector::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// The zero vector
    pub const fn zeros() -> Self {
        Vector::new(0.0, 0.0, 0.0)
    }

    /// Returns the component at `index`
    ///
    /// # Errors
    ///
    /// [`EvspaceError::IndexOutOfRange`](crate::EvspaceError::IndexOutOfRange)
    /// if `index > 2`.
    pub fn get(&self, index: usize) -> Result<f64> {
        Ok(self[check_index(index)?])
    }

    /// Replaces the component at `index`
    ///
    /// The vector is left untouched when the index is rejected.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self[check_index(index)?] = value;
        Ok(())
    }

    /// Returns the components as a `[x, y, z]` array
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evspace::linalg::Vector;
    ///
    /// assert_eq!(Vector::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Squared magnitude, avoiding the square root
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Returns a unit vector in the same direction
    ///
    /// The zero vector has no direction; its norm has NaN components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evspace::linalg::Vector;
    ///
    /// let unit = Vector::new(3.0, 4.0, 0.0).norm();
    /// assert_eq!(unit, Vector::new(0.6, 0.8, 0.0));
    /// ```
    pub fn norm(&self) -> Vector {
        *self / self.magnitude()
    }

    /// Normalizes the vector in place
    pub fn normalize(&mut self) -> &mut Self {
        *self /= self.magnitude();
        self
    }

    /// Calculates the dot product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the angle between two vectors
    ///
    /// # Returns
    ///
    /// Angle in radians [0, π], or 0 if either vector has zero length
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evspace::linalg::Vector;
    /// use std::f64::consts::PI;
    ///
    /// let angle = Vector::E1.angle_to(&Vector::E2);
    /// assert!((angle - PI / 2.0).abs() < 1e-15);
    /// ```
    pub fn angle_to(&self, other: &Vector) -> f64 {
        let dot_product = self.dot(other);
        let mag_product = (self.magnitude_squared() * other.magnitude_squared()).sqrt();

        if mag_product == 0.0 {
            return 0.0;
        }

        let cos_angle = dot_product / mag_product;

        // Handle numerical precision issues
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        }
    }

    /// Scalar coefficient of the projection of `self` onto `onto`
    fn scalar_projection(&self, onto: &Vector) -> f64 {
        self.dot(onto) / onto.magnitude_squared()
    }

    /// Vector projection of `self` onto `onto`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evspace::linalg::Vector;
    ///
    /// let v = Vector::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.projection(&Vector::new(0.0, 0.0, 5.0)), Vector::new(0.0, 0.0, 3.0));
    /// ```
    pub fn projection(&self, onto: &Vector) -> Vector {
        *onto * self.scalar_projection(onto)
    }

    /// Removes the component of `self` that lies along `exclude`
    ///
    /// The result is orthogonal to `exclude`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evspace::linalg::Vector;
    ///
    /// let v = Vector::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.exclude(&Vector::E3), Vector::new(1.0, 2.0, 0.0));
    /// ```
    pub fn exclude(&self, exclude: &Vector) -> Vector {
        *self - self.projection(exclude)
    }

    /// ULP based equality; each component may differ by at most `max_ulps`
    pub fn compare_to(&self, other: &Vector, max_ulps: u32) -> bool {
        self.ulps_eq(other, 0.0, max_ulps)
    }

    /// Tolerance based equality combining relative and absolute error
    pub fn almost_eq(&self, other: &Vector, rel_tol: f64, abs_tol: f64) -> bool {
        self.relative_eq(other, abs_tol, rel_tol)
    }

    /// [`Vector::almost_eq`] with the crate default tolerances
    pub fn is_close(&self, other: &Vector) -> bool {
        self.almost_eq(other, DEFAULT_REL_TOL, DEFAULT_ABS_TOL)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vector {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<[f64; 3]> for Vector {
    fn from(values: [f64; 3]) -> Self {
        Vector::new(values[0], values[1], values[2])
    }
}

impl From<Vector> for [f64; 3] {
    fn from(vector: Vector) -> Self {
        vector.to_array()
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(vec: Vector3<f64>) -> Self {
        Vector::from_vector3(vec)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(vector: Vector) -> Self {
        vector.to_vector3()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector index {} out of range", index),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector index {} out of range", index),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

// Arithmetic operations
impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Vector) {
        *self = *self - other;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        Vector {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Vector {
        Vector {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}

// approx support so vectors work with assert_relative_eq! and friends
impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        DEFAULT_MAX_ULPS
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
