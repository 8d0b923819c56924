use foundation::bounds::Bounds2;

use crate::feature::{FeatureClass, FeatureId, Outline};

/// Parallel-array feature storage.
///
/// `spawn` hands out ascending ids; class, outline, bounds and label are
/// attached per feature. Queries iterate in ascending id order, which is
/// also draw order and the picking tie-break order.
#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    classes: Vec<Option<FeatureClass>>,
    outlines: Vec<Option<Outline>>,
    bounds: Vec<Option<Bounds2>>,
    labels: Vec<Option<String>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> FeatureId {
        let id = FeatureId(self.next_index);
        self.next_index += 1;
        self.ensure_capacity(id.index() as usize);
        id
    }

    pub fn len(&self) -> usize {
        self.next_index as usize
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }

    pub fn set_class(&mut self, feature: FeatureId, class: FeatureClass) {
        self.ensure_capacity(feature.index() as usize);
        self.classes[feature.index() as usize] = Some(class);
    }

    pub fn set_outline(&mut self, feature: FeatureId, outline: Outline) {
        self.ensure_capacity(feature.index() as usize);
        self.outlines[feature.index() as usize] = Some(outline);
    }

    pub fn set_bounds(&mut self, feature: FeatureId, bounds: Bounds2) {
        self.ensure_capacity(feature.index() as usize);
        self.bounds[feature.index() as usize] = Some(bounds);
    }

    pub fn set_label(&mut self, feature: FeatureId, label: impl Into<String>) {
        self.ensure_capacity(feature.index() as usize);
        self.labels[feature.index() as usize] = Some(label.into());
    }

    pub fn class(&self, feature: FeatureId) -> Option<FeatureClass> {
        self.classes.get(feature.index() as usize).and_then(|c| *c)
    }

    pub fn outline(&self, feature: FeatureId) -> Option<&Outline> {
        self.outlines
            .get(feature.index() as usize)
            .and_then(|o| o.as_ref())
    }

    pub fn bounds(&self, feature: FeatureId) -> Option<Bounds2> {
        self.bounds.get(feature.index() as usize).and_then(|b| *b)
    }

    pub fn label(&self, feature: FeatureId) -> Option<&str> {
        self.labels
            .get(feature.index() as usize)
            .and_then(|l| l.as_deref())
    }

    /// Features of `class` that have an outline, ascending id order.
    pub fn features_of_class(&self, class: FeatureClass) -> Vec<(FeatureId, &Outline)> {
        let mut out = Vec::new();
        for (idx, c) in self.classes.iter().enumerate() {
            if *c != Some(class) {
                continue;
            }
            let Some(outline) = self.outlines.get(idx).and_then(|o| o.as_ref()) else {
                continue;
            };
            out.push((FeatureId(idx as u32), outline));
        }
        out
    }

    /// First feature of `class` whose label matches `label` exactly.
    pub fn find_labeled(&self, class: FeatureClass, label: &str) -> Option<FeatureId> {
        for (idx, c) in self.classes.iter().enumerate() {
            if *c != Some(class) {
                continue;
            }
            if self.labels.get(idx).and_then(|l| l.as_deref()) == Some(label) {
                return Some(FeatureId(idx as u32));
            }
        }
        None
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.classes.len() <= idx {
            let new_len = idx + 1;
            self.classes.resize(new_len, None);
            self.outlines.resize(new_len, None);
            self.bounds.resize(new_len, None);
            self.labels.resize(new_len, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::feature::{FeatureClass, Outline};
    use foundation::bounds::Bounds2;
    use foundation::math::Vec2;

    #[test]
    fn spawn_and_query_by_class() {
        let mut world = World::new();

        let region = world.spawn();
        world.set_class(region, FeatureClass::Region);
        world.set_outline(
            region,
            Outline::Area {
                rings: vec![vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(1.0, 0.0),
                    Vec2::new(1.0, 1.0),
                ]],
            },
        );

        let plant = world.spawn();
        world.set_class(plant, FeatureClass::PointOfInterest);
        world.set_outline(
            plant,
            Outline::Marker {
                position: Vec2::new(5.0, 5.0),
            },
        );

        let regions = world.features_of_class(FeatureClass::Region);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].0, region);
        assert!(world.features_of_class(FeatureClass::Subregion).is_empty());
    }

    #[test]
    fn queries_keep_ascending_id_order() {
        let mut world = World::new();
        for _ in 0..3 {
            let id = world.spawn();
            world.set_class(id, FeatureClass::Subregion);
            world.set_outline(
                id,
                Outline::Marker {
                    position: Vec2::new(0.0, 0.0),
                },
            );
        }

        let ids: Vec<u32> = world
            .features_of_class(FeatureClass::Subregion)
            .iter()
            .map(|(id, _)| id.index())
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn features_without_outline_are_skipped() {
        let mut world = World::new();
        let id = world.spawn();
        world.set_class(id, FeatureClass::Region);
        assert!(world.features_of_class(FeatureClass::Region).is_empty());
    }

    #[test]
    fn find_labeled_matches_class_and_label() {
        let mut world = World::new();
        let a = world.spawn();
        world.set_class(a, FeatureClass::Region);
        world.set_label(a, "California");

        let b = world.spawn();
        world.set_class(b, FeatureClass::PointOfInterest);
        world.set_label(b, "Diablo Canyon");

        assert_eq!(world.find_labeled(FeatureClass::Region, "California"), Some(a));
        assert_eq!(world.find_labeled(FeatureClass::Region, "Diablo Canyon"), None);
        assert_eq!(
            world.find_labeled(FeatureClass::PointOfInterest, "Diablo Canyon"),
            Some(b)
        );
    }

    #[test]
    fn bounds_round_trip() {
        let mut world = World::new();
        let id = world.spawn();
        let b = Bounds2::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        world.set_bounds(id, b);
        assert_eq!(world.bounds(id), Some(b));
    }
}
