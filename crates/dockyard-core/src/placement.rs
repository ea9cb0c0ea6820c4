//! Placement records handed from the layout engines to exporters.

use std::fmt;

use crate::geometry::Vec3;

/// Rotation of a placed module in degrees.
///
/// Modules are always laid out in the canonical orientation; the type exists
/// so the output format can carry rotation explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    yaw: i32,
    pitch: i32,
    roll: i32,
}

impl Orientation {
    /// The canonical orientation: no rotation on any axis.
    pub const CANONICAL: Orientation = Orientation {
        yaw: 0,
        pitch: 0,
        roll: 0,
    };

    /// Creates an orientation from yaw, pitch and roll in degrees.
    pub fn new(yaw: i32, pitch: i32, roll: i32) -> Self {
        Self { yaw, pitch, roll }
    }

    pub fn yaw(self) -> i32 {
        self.yaw
    }

    pub fn pitch(self) -> i32 {
        self.pitch
    }

    pub fn roll(self) -> i32 {
        self.roll
    }

    /// Returns `true` if this is [`Self::CANONICAL`].
    pub fn is_canonical(self) -> bool {
        self == Self::CANONICAL
    }
}

/// A module placed in the world: catalog key, center position and orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    key: String,
    position: Vec3,
    orientation: Orientation,
}

impl Placement {
    /// Creates a placement in the canonical orientation.
    pub fn new(key: impl Into<String>, position: Vec3) -> Self {
        Self {
            key: key.into(),
            position,
            orientation: Orientation::CANONICAL,
        }
    }

    /// Sets the orientation (builder style).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Catalog key of the placed module.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// World-space center of the placed module.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Orientation of the placed module.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.key, self.position)
    }
}
