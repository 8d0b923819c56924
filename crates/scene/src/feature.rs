use foundation::math::Vec2;

/// Drawn radius of point-of-interest markers, in projected-plane units.
/// Hit testing uses the same radius so clicks and circles agree.
pub const MARKER_RADIUS: f64 = 4.5;

/// Identifies a feature within a `World`.
///
/// Plain index: worlds are built once at load time and never remove
/// features, so no generation counter is needed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FeatureId(pub u32);

impl FeatureId {
    pub fn index(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FeatureClass {
    /// State boundary. Clickable: focuses the view.
    Region,
    /// County boundary. Drawn, never interactive.
    Subregion,
    /// Power-plant marker. Hoverable: drives the tooltip.
    PointOfInterest,
}

/// Projected-plane shape of a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Closed rings; the first ring is the outer boundary, the rest holes.
    Area { rings: Vec<Vec<Vec2>> },
    Marker { position: Vec2 },
}
