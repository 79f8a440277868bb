//! Constants module for rotation and comparison calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Comparison
/// Default maximum ULP distance for `ulps_eq!` comparisons
pub const DEFAULT_MAX_ULPS: u32 = 10;
/// Default relative tolerance for tolerance based equality
pub const DEFAULT_REL_TOL: f64 = 1e-9;
/// Default absolute tolerance for tolerance based equality
pub const DEFAULT_ABS_TOL: f64 = 1e-15;

/// Number of components in a vector and of rows/columns in a matrix
pub const DIM: usize = 3;
