use scene::World;
use scene::feature::{FeatureClass, FeatureId, Outline};

use crate::layer::{Layer, LayerId};

/// Draw layer over one feature class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FeatureLayer {
    id: LayerId,
    class: FeatureClass,
}

/// One extracted feature, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFeature {
    pub feature: FeatureId,
    pub outline: Outline,
    pub label: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeatureLayerSnapshot {
    pub features: Vec<ExtractedFeature>,
}

impl FeatureLayer {
    pub fn new(id: u64, class: FeatureClass) -> Self {
        Self {
            id: LayerId(id),
            class,
        }
    }

    pub fn class(&self) -> FeatureClass {
        self.class
    }

    /// Snapshot of this layer's features in ascending id (= draw) order.
    pub fn extract(&self, world: &World) -> FeatureLayerSnapshot {
        let mut out = FeatureLayerSnapshot::default();
        for (feature, outline) in world.features_of_class(self.class) {
            out.features.push(ExtractedFeature {
                feature,
                outline: outline.clone(),
                label: world.label(feature).map(str::to_string),
            });
        }
        out
    }
}

impl Layer for FeatureLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}
