//! Named reference frames loaded from JSON
//!
//! A registry file is a JSON object mapping frame names to
//! [`FrameDefinition`]s:
//!
//! ```json
//! {
//!   "body":   { "order": "XYZ", "angles": [30, 45, 60], "degrees": true },
//!   "sensor": { "order": "YXY", "angles": [0, 0.785, 1.571],
//!               "offset": [100, 200, 300] }
//! }
//! ```
//!
//! The name `"inertial"` is reserved for the un-rotated frame at the origin
//! and always resolves, even in an empty registry.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::reference::{FrameDefinition, ReferenceFrame};
use crate::linalg::Vector;
use crate::{EvspaceError, Result};

/// Reserved name of the inertial frame
pub const INERTIAL_FRAME: &str = "inertial";

/// A set of named frames, all defined relative to the inertial frame
#[derive(Debug, Clone)]
pub struct FrameRegistry {
    frames: BTreeMap<String, ReferenceFrame>,
    inertial: ReferenceFrame,
}

impl FrameRegistry {
    pub fn new() -> Self {
        FrameRegistry {
            frames: BTreeMap::new(),
            inertial: ReferenceFrame::inertial(),
        }
    }

    /// Parses a JSON object of frame definitions
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definitions: BTreeMap<String, FrameDefinition> = serde_json::from_str(json)?;

        let mut registry = FrameRegistry::new();
        for (name, definition) in definitions {
            registry.insert(name, ReferenceFrame::from(definition))?;
        }

        log::debug!("Loaded {} reference frames", registry.len());
        Ok(registry)
    }

    /// Reads and parses a JSON registry file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading frame definitions from {}", path.display());
        let json = fs::read_to_string(path)?;
        FrameRegistry::from_json_str(&json)
    }

    /// Serializes all registered frames, with angles in radians
    pub fn to_json_string(&self) -> Result<String> {
        let definitions: BTreeMap<&str, FrameDefinition> = self
            .frames
            .iter()
            .map(|(name, frame)| (name.as_str(), FrameDefinition::from(frame.clone())))
            .collect();
        Ok(serde_json::to_string_pretty(&definitions)?)
    }

    /// Adds or replaces a frame, returning the one it replaced
    ///
    /// Fails if `name` is the reserved inertial name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        frame: ReferenceFrame,
    ) -> Result<Option<ReferenceFrame>> {
        let name = name.into();
        if name == INERTIAL_FRAME {
            return Err(EvspaceError::ParseError(format!(
                "'{}' is a reserved frame name",
                INERTIAL_FRAME
            )));
        }

        log::debug!(
            "Registering frame '{}' ({} {})",
            name,
            frame.order(),
            frame.rotation_type()
        );
        Ok(self.frames.insert(name, frame))
    }

    pub fn remove(&mut self, name: &str) -> Option<ReferenceFrame> {
        self.frames.remove(name)
    }

    pub fn get(&self, name: &str) -> Result<&ReferenceFrame> {
        if name == INERTIAL_FRAME {
            return Ok(&self.inertial);
        }
        self.frames
            .get(name)
            .ok_or_else(|| EvspaceError::FrameNotFound(name.to_string()))
    }

    /// Mutable access for updating a frame's angles or offset in place
    pub fn get_mut(&mut self, name: &str) -> Result<&mut ReferenceFrame> {
        self.frames
            .get_mut(name)
            .ok_or_else(|| EvspaceError::FrameNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        name == INERTIAL_FRAME || self.frames.contains_key(name)
    }

    /// Registered frame names in sorted order, excluding the inertial frame
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Moves `vector` from frame `from` into frame `to`
    pub fn transform(&self, from: &str, to: &str, vector: &Vector) -> Result<Vector> {
        let source = self.get(from)?;
        let target = self.get(to)?;
        Ok(source.rotate_to_frame(target, vector))
    }
}

impl Default for FrameRegistry {
    fn default() -> Self {
        FrameRegistry::new()
    }
}
