use scene::feature::FeatureClass;

/// CSS paint for one feature class. Stroke width is uniform and owned by
/// the draw group, where it is compensated for zoom.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClassStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl ClassStyle {
    pub const fn new(fill: &'static str, stroke: &'static str) -> Self {
        Self { fill, stroke }
    }
}

/// Style table for the map's three classes plus the selection highlight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Symbology {
    pub region: ClassStyle,
    pub subregion: ClassStyle,
    pub poi: ClassStyle,
    /// Fill applied to the focused region.
    pub selected_fill: &'static str,
}

impl Default for Symbology {
    fn default() -> Self {
        Self {
            region: ClassStyle::new("#d9d9d9", "#ffffff"),
            subregion: ClassStyle::new("none", "#bdbdbd"),
            poi: ClassStyle::new("#e6550d", "none"),
            selected_fill: "maroon",
        }
    }
}

impl Symbology {
    pub fn style(&self, class: FeatureClass) -> ClassStyle {
        match class {
            FeatureClass::Region => self.region,
            FeatureClass::Subregion => self.subregion,
            FeatureClass::PointOfInterest => self.poi,
        }
    }
}
