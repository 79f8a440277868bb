//! evspace: fixed-size linear algebra and Euler-angle reference frames
//!
//! This crate provides 3-element vectors, 3x3 matrices and the rotation
//! machinery needed to move vectors between rotated (and optionally
//! translated) reference frames, as used in spatial and orbital mechanics.
//!
//! Every cross-frame transform is routed through the inertial frame: a
//! vector is first rotated out of its source frame, then into the target.
//!
//! ```rust
//! use evspace::{EulerAngles, ReferenceFrame, RotationOrder, RotationType, Vector};
//! use std::f64::consts::PI;
//!
//! let frame = ReferenceFrame::new(
//!     RotationOrder::XYZ,
//!     RotationType::Intrinsic,
//!     EulerAngles::new(PI / 6.0, PI / 4.0, PI / 3.0),
//! );
//! let rotated = frame.rotate_to(&Vector::new(1.0, 2.0, 3.0));
//! let restored = frame.rotate_from(&rotated);
//! assert!((restored - Vector::new(1.0, 2.0, 3.0)).magnitude() < 1e-12);
//! ```

use thiserror::Error;

pub mod constants;
pub mod framelib;
pub mod linalg;
pub mod rotation;

// Re-export commonly used types
pub use framelib::{FrameDefinition, FrameRegistry, ReferenceFrame};
pub use linalg::{Matrix, Vector};
pub use rotation::{Axis, EulerAngles, EulerRotation, RotationOrder, RotationType};

/// Main error type for the evspace library
#[derive(Debug, Error)]
pub enum EvspaceError {
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Matrix index ({row}, {col}) out of range")]
    MatrixIndexOutOfRange { row: usize, col: usize },

    #[error("Expected {expected} values, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Unable to invert singular matrix")]
    SingularMatrix,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Frame not found: {0}")]
    FrameNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for evspace operations
pub type Result<T> = std::result::Result<T, EvspaceError>;

/// Checks a component index against a fixed length of 3
pub(crate) fn check_index(index: usize) -> Result<usize> {
    if index > 2 {
        Err(EvspaceError::IndexOutOfRange { index, len: 3 })
    } else {
        Ok(index)
    }
}
