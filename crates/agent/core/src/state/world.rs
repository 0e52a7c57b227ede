//! World bounds.

use super::structures::Corner;
use super::Vec2;

/// Static extent of the explorable world.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    pub center: Vec2,
    pub dimensions: Vec2,
}

impl WorldBounds {
    pub fn new(center: Vec2, dimensions: Vec2) -> Self {
        Self { center, dimensions }
    }

    /// The given bounding corner pulled inward by `margin` on both axes.
    ///
    /// Sweep targets are inset from the true corner so the agent never has
    /// to hug the world edge to tick a corner off.
    pub fn corner(&self, corner: Corner, margin: Vec2) -> Vec2 {
        let half = self.dimensions * 0.5;
        let (sx, sy) = corner.signs();
        self.center + Vec2::new(sx * (half.x - margin.x), sy * (half.y - margin.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_inset_by_margin() {
        let world = WorldBounds::new(Vec2::ZERO, Vec2::new(200.0, 100.0));
        let margin = Vec2::new(25.0, 25.0);

        assert_eq!(world.corner(Corner::TopLeft, margin), Vec2::new(-75.0, 25.0));
        assert_eq!(world.corner(Corner::BottomRight, margin), Vec2::new(75.0, -25.0));
    }
}
