use foundation::math::Vec2;

use crate::feature::{FeatureClass, FeatureId, MARKER_RADIUS, Outline};
use crate::world::World;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    pub feature: FeatureId,
    pub class: FeatureClass,
    /// Zero for area containment; center distance for markers.
    pub distance: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    pub marker_radius: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            marker_radius: MARKER_RADIUS,
        }
    }
}

/// Deterministic 2D hit test in projected-plane coordinates.
///
/// Ordering contract:
/// - Areas: the lowest `FeatureId` index containing the point wins.
/// - Markers: the closest marker within `marker_radius` wins; equal
///   distances break toward the lower index.
pub fn pick_class(
    world: &World,
    class: FeatureClass,
    point: Vec2,
    opts: PickOptions,
) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;

    for (feature, outline) in world.features_of_class(class) {
        match outline {
            Outline::Area { rings } => {
                if let Some(bounds) = world.bounds(feature)
                    && !bounds.contains(point)
                {
                    continue;
                }
                if point_in_rings(rings, point) {
                    // Ascending iteration order: the first hit is the winner.
                    return Some(PickHit {
                        feature,
                        class,
                        distance: 0.0,
                    });
                }
            }
            Outline::Marker { position } => {
                let distance = position.distance(point);
                if distance > opts.marker_radius {
                    continue;
                }
                let closer = match best {
                    None => true,
                    Some(b) => distance < b.distance,
                };
                if closer {
                    best = Some(PickHit {
                        feature,
                        class,
                        distance,
                    });
                }
            }
        }
    }

    best
}

/// Even-odd ray cast over every ring, so holes subtract naturally.
fn point_in_rings(rings: &[Vec<Vec2>], p: Vec2) -> bool {
    let mut inside = false;
    for ring in rings {
        if ring.len() < 2 {
            continue;
        }
        let mut j = ring.len() - 1;
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
    }
    inside
}
