//! Tracked structure records and rectangular footprints.

use super::Vec2;

/// One of the four corners of an axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Sign pair mapping this corner onto `(±half_extents.x, ±half_extents.y)`.
    pub(crate) fn signs(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (-1.0, 1.0),
            Corner::TopRight => (1.0, 1.0),
            Corner::BottomRight => (1.0, -1.0),
            Corner::BottomLeft => (-1.0, -1.0),
        }
    }
}

/// Axis-aligned rectangle described by center and half-extents.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Footprint {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Whether the point lies inside the rectangle (boundary inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= self.half_extents.x
            && (point.y - self.center.y).abs() <= self.half_extents.y
    }

    /// The given corner moved inward by `inset` on both axes.
    pub fn corner(&self, corner: Corner, inset: Vec2) -> Vec2 {
        let (sx, sy) = corner.signs();
        self.center
            + Vec2::new(
                sx * (self.half_extents.x - inset.x),
                sy * (self.half_extents.y - inset.y),
            )
    }

    /// The rectangle grown outward by `margin` on both axes.
    pub fn expanded(&self, margin: Vec2) -> Footprint {
        Footprint {
            center: self.center,
            half_extents: self.half_extents + margin,
        }
    }
}

/// A structure the agent has sighted, and whether it has been fully searched.
///
/// Created on first sighting (deduplicated by exact center equality),
/// mutated once when the search completes, never removed except by the
/// perimeter sweep's full reset.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct StructureRecord {
    pub footprint: Footprint,
    pub checked: bool,
}

impl StructureRecord {
    pub fn new(footprint: Footprint) -> Self {
        Self {
            footprint,
            checked: false,
        }
    }
}
