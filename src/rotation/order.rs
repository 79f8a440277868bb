//! Rotation orders (Euler sequences) and the intrinsic/extrinsic tag

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Axis;
use crate::EvspaceError;

/// Ordered triple of axes defining an Euler angle sequence
///
/// Any triple is accepted. Tait-Bryan orders use three distinct axes and
/// proper Euler orders repeat the first axis last, but neither convention is
/// enforced; a degenerate order such as `X-X-Y` still composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RotationOrder {
    pub first: Axis,
    pub second: Axis,
    pub third: Axis,
}

impl RotationOrder {
    // Tait-Bryan orders
    pub const XYZ: RotationOrder = RotationOrder::new(Axis::X, Axis::Y, Axis::Z);
    pub const XZY: RotationOrder = RotationOrder::new(Axis::X, Axis::Z, Axis::Y);
    pub const YXZ: RotationOrder = RotationOrder::new(Axis::Y, Axis::X, Axis::Z);
    pub const YZX: RotationOrder = RotationOrder::new(Axis::Y, Axis::Z, Axis::X);
    pub const ZXY: RotationOrder = RotationOrder::new(Axis::Z, Axis::X, Axis::Y);
    pub const ZYX: RotationOrder = RotationOrder::new(Axis::Z, Axis::Y, Axis::X);

    // Proper Euler orders
    pub const XYX: RotationOrder = RotationOrder::new(Axis::X, Axis::Y, Axis::X);
    pub const XZX: RotationOrder = RotationOrder::new(Axis::X, Axis::Z, Axis::X);
    pub const YXY: RotationOrder = RotationOrder::new(Axis::Y, Axis::X, Axis::Y);
    pub const YZY: RotationOrder = RotationOrder::new(Axis::Y, Axis::Z, Axis::Y);
    pub const ZXZ: RotationOrder = RotationOrder::new(Axis::Z, Axis::X, Axis::Z);
    pub const ZYZ: RotationOrder = RotationOrder::new(Axis::Z, Axis::Y, Axis::Z);

    /// The twelve classical Euler sequences
    pub const ALL: [RotationOrder; 12] = [
        Self::XYZ,
        Self::XZY,
        Self::YXZ,
        Self::YZX,
        Self::ZXY,
        Self::ZYX,
        Self::XYX,
        Self::XZX,
        Self::YXY,
        Self::YZY,
        Self::ZXZ,
        Self::ZYZ,
    ];

    pub const fn new(first: Axis, second: Axis, third: Axis) -> Self {
        RotationOrder {
            first,
            second,
            third,
        }
    }

    pub fn axes(&self) -> [Axis; 3] {
        [self.first, self.second, self.third]
    }

    /// Same axes in the opposite sequence
    pub fn reversed(&self) -> RotationOrder {
        RotationOrder::new(self.third, self.second, self.first)
    }

    /// True for proper Euler orders, where the first and last axes match
    pub fn is_proper(&self) -> bool {
        self.first == self.third && self.first != self.second
    }

    /// True for Tait-Bryan orders, where all three axes differ
    pub fn is_tait_bryan(&self) -> bool {
        self.first != self.second && self.second != self.third && self.first != self.third
    }
}

impl Default for RotationOrder {
    fn default() -> Self {
        RotationOrder::XYZ
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, self.second, self.third)
    }
}

impl FromStr for RotationOrder {
    type Err = EvspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let axes = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' '))
            .map(Axis::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        match axes.as_slice() {
            [first, second, third] => Ok(RotationOrder::new(*first, *second, *third)),
            _ => Err(EvspaceError::ParseError(format!(
                "Rotation order '{}' must name exactly three axes",
                s
            ))),
        }
    }
}

impl TryFrom<String> for RotationOrder {
    type Error = EvspaceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RotationOrder> for String {
    fn from(order: RotationOrder) -> Self {
        order.to_string()
    }
}

/// How successive elementary rotations are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationType {
    /// Each rotation is about an axis of the frame produced by the previous one
    #[default]
    Intrinsic,
    /// Each rotation is about a fixed axis of the original frame
    Extrinsic,
}

impl RotationType {
    /// The other rotation type
    pub fn flipped(self) -> RotationType {
        match self {
            RotationType::Intrinsic => RotationType::Extrinsic,
            RotationType::Extrinsic => RotationType::Intrinsic,
        }
    }
}

impl fmt::Display for RotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationType::Intrinsic => f.write_str("intrinsic"),
            RotationType::Extrinsic => f.write_str("extrinsic"),
        }
    }
}

impl FromStr for RotationType {
    type Err = EvspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intrinsic" | "i" => Ok(RotationType::Intrinsic),
            "extrinsic" | "e" => Ok(RotationType::Extrinsic),
            _ => Err(EvspaceError::ParseError(format!(
                "Unknown rotation type '{}'",
                s
            ))),
        }
    }
}
