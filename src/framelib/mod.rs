//! Reference frames and named frame collections

pub mod reference;
pub mod registry;

pub use reference::{FrameDefinition, ReferenceFrame};
pub use registry::{FrameRegistry, INERTIAL_FRAME};
