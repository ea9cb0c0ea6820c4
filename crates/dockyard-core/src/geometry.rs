//! Integer geometry for station layout.
//!
//! All station coordinates live on an integer grid measured in meters. This
//! module provides the vector type used for positions and offsets, the six
//! cardinal [`Direction`]s attachment points can face, and axis-aligned
//! [`Bounds`] with the strict overlap test used by the placement engine.
//!
//! # Overview
//!
//! - [`Vec3`] - Integer 3-vector for positions, sizes and offsets.
//! - [`Axis`] - One of the three world axes.
//! - [`Direction`] - A signed unit step along one axis.
//! - [`Bounds`] - Axis-aligned box built from a center and a size.
//! - [`overlaps`] - Strict overlap test between two placed module boxes.

use std::fmt;

use thiserror::Error;

use crate::catalog::ModuleInfo;

/// Integer 3-vector used for world positions, offsets and extents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vec3 {
    x: i32,
    y: i32,
    z: i32,
}

impl Vec3 {
    /// The origin `(0, 0, 0)`.
    pub const ZERO: Vec3 = Vec3 { x: 0, y: 0, z: 0 };

    /// Creates a new vector from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all three components set to `value`.
    pub const fn splat(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the x component.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y component.
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns the z component.
    pub fn z(self) -> i32 {
        self.z
    }

    /// Returns the component along `axis`.
    pub fn component(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns `true` if every component is zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Component-wise sum of two vectors, saturating at the `i32` range.
    pub fn add_vec(self, other: Vec3) -> Self {
        Self {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
            z: self.z.saturating_add(other.z),
        }
    }

    /// Component-wise difference of two vectors, saturating at the `i32` range.
    pub fn sub_vec(self, other: Vec3) -> Self {
        Self {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
            z: self.z.saturating_sub(other.z),
        }
    }

    /// Multiplies every component by `factor`, saturating at the `i32` range.
    pub fn scale(self, factor: i32) -> Self {
        Self {
            x: self.x.saturating_mul(factor),
            y: self.y.saturating_mul(factor),
            z: self.z.saturating_mul(factor),
        }
    }

    /// Truncating half of every component.
    pub fn half(self) -> Self {
        Self {
            x: self.x / 2,
            y: self.y / 2,
            z: self.z / 2,
        }
    }

    /// Manhattan distance from the origin, `|x| + |y| + |z|`.
    ///
    /// Widened to `i64` so that distant fallback positions cannot overflow.
    pub fn manhattan_length(self) -> i64 {
        i64::from(self.x).abs() + i64::from(self.y).abs() + i64::from(self.z).abs()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The three axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Error returned when a vector is not a signed unit step along one axis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a cardinal unit direction")]
pub struct NotCardinal(pub Vec3);

/// A cardinal direction: exactly one component is `±1`, the others are `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    axis: Axis,
    positive: bool,
}

impl Direction {
    pub const POS_X: Direction = Direction::new(Axis::X, true);
    pub const NEG_X: Direction = Direction::new(Axis::X, false);
    pub const POS_Y: Direction = Direction::new(Axis::Y, true);
    pub const NEG_Y: Direction = Direction::new(Axis::Y, false);
    pub const POS_Z: Direction = Direction::new(Axis::Z, true);
    pub const NEG_Z: Direction = Direction::new(Axis::Z, false);

    /// The six cardinal directions in `+X, -X, +Y, -Y, +Z, -Z` order.
    pub const ALL: [Direction; 6] = [
        Self::POS_X,
        Self::NEG_X,
        Self::POS_Y,
        Self::NEG_Y,
        Self::POS_Z,
        Self::NEG_Z,
    ];

    /// Creates a direction along `axis`, pointing toward positive values when
    /// `positive` is true.
    pub const fn new(axis: Axis, positive: bool) -> Self {
        Self { axis, positive }
    }

    /// Converts a unit vector into a direction.
    ///
    /// # Errors
    ///
    /// Returns [`NotCardinal`] unless exactly one component is `±1` and the
    /// other two are `0`.
    pub fn from_vec3(vector: Vec3) -> Result<Self, NotCardinal> {
        match (vector.x, vector.y, vector.z) {
            (1, 0, 0) => Ok(Self::POS_X),
            (-1, 0, 0) => Ok(Self::NEG_X),
            (0, 1, 0) => Ok(Self::POS_Y),
            (0, -1, 0) => Ok(Self::NEG_Y),
            (0, 0, 1) => Ok(Self::POS_Z),
            (0, 0, -1) => Ok(Self::NEG_Z),
            _ => Err(NotCardinal(vector)),
        }
    }

    /// Returns the axis this direction runs along.
    pub fn axis(self) -> Axis {
        self.axis
    }

    /// Returns `+1` or `-1`.
    pub fn sign(self) -> i32 {
        if self.positive { 1 } else { -1 }
    }

    /// Returns the opposite direction on the same axis.
    pub fn opposite(self) -> Self {
        Self::new(self.axis, !self.positive)
    }

    /// Returns the unit vector for this direction.
    pub fn to_vec3(self) -> Vec3 {
        let sign = self.sign();
        match self.axis {
            Axis::X => Vec3::new(sign, 0, 0),
            Axis::Y => Vec3::new(0, sign, 0),
            Axis::Z => Vec3::new(0, 0, sign),
        }
    }

    /// Steps `distance` meters from `origin` along this direction.
    ///
    /// Only the coordinate on [`Self::axis`] changes.
    pub fn step(self, origin: Vec3, distance: i32) -> Vec3 {
        origin.add_vec(self.to_vec3().scale(distance))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.positive { '+' } else { '-' };
        let axis = match self.axis {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        };
        write!(f, "{sign}{axis}")
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: Vec3,
    max: Vec3,
}

impl Bounds {
    /// Builds the box around `center` with full extents `size`.
    ///
    /// Half-extents use truncating integer division, so odd sizes lose one
    /// meter in total.
    pub fn from_center(center: Vec3, size: Vec3) -> Self {
        let half = size.half();
        Self {
            min: center.sub_vec(half),
            max: center.add_vec(half),
        }
    }

    /// Returns the minimum corner.
    pub fn min(self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(self) -> Vec3 {
        self.max
    }

    /// Returns `true` if the two boxes share interior volume.
    ///
    /// Boxes whose faces exactly touch do not overlap.
    pub fn overlaps(self, other: Bounds) -> bool {
        Axis::ALL.iter().all(|&axis| {
            self.min.component(axis) < other.max.component(axis)
                && self.max.component(axis) > other.min.component(axis)
        })
    }
}

/// Tests whether two modules placed at the given centers overlap.
///
/// Only each module's [`ModuleInfo::size`] is used; the buffer affects where
/// positions are proposed, never whether two boxes intersect.
pub fn overlaps(center_a: Vec3, info_a: &ModuleInfo, center_b: Vec3, info_b: &ModuleInfo) -> bool {
    Bounds::from_center(center_a, info_a.size()).overlaps(Bounds::from_center(center_b, info_b.size()))
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn vec3_strategy() -> impl Strategy<Value = Vec3> {
        (-5000i32..5000, -5000i32..5000, -5000i32..5000).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    fn info_strategy() -> impl Strategy<Value = ModuleInfo> {
        (1i32..2000, 1i32..2000, 1i32..2000, 0i32..200)
            .prop_map(|(x, y, z, buffer)| ModuleInfo::new(Vec3::new(x, y, z), buffer))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Overlap is symmetric in its two operands.
    fn check_overlap_is_symmetric(
        a: Vec3,
        info_a: &ModuleInfo,
        b: Vec3,
        info_b: &ModuleInfo,
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(overlaps(a, info_a, b, info_b), overlaps(b, info_b, a, info_a));
        Ok(())
    }

    /// A box with a non-empty extent overlaps itself.
    fn check_box_overlaps_itself(center: Vec3, info: &ModuleInfo) -> Result<(), TestCaseError> {
        let size = info.size();
        prop_assume!(size.x() >= 2 && size.y() >= 2 && size.z() >= 2);
        prop_assert!(overlaps(center, info, center, info));
        Ok(())
    }

    /// Placing a box flush against another along any cardinal direction never overlaps.
    fn check_flush_neighbors_do_not_overlap(
        center: Vec3,
        info_a: &ModuleInfo,
        info_b: &ModuleInfo,
    ) -> Result<(), TestCaseError> {
        for direction in Direction::ALL {
            let axis = direction.axis();
            let distance = info_a.size().component(axis) / 2 + info_b.size().component(axis) / 2;
            let neighbor = direction.step(center, distance);
            prop_assert!(
                !overlaps(center, info_a, neighbor, info_b),
                "flush neighbor along {} overlaps",
                direction
            );
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in vec3_strategy(), info_a in info_strategy(), b in vec3_strategy(), info_b in info_strategy()) {
            check_overlap_is_symmetric(a, &info_a, b, &info_b)?;
        }

        #[test]
        fn box_overlaps_itself(center in vec3_strategy(), info in info_strategy()) {
            check_box_overlaps_itself(center, &info)?;
        }

        #[test]
        fn flush_neighbors_do_not_overlap(center in vec3_strategy(), info_a in info_strategy(), info_b in info_strategy()) {
            check_flush_neighbors_do_not_overlap(center, &info_a, &info_b)?;
        }
    }
}
