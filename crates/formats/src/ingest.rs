use foundation::bounds::Bounds2;
use foundation::math::{AlbersUsa, Vec2};
use scene::World;
use scene::feature::{FeatureClass, FeatureId, Outline};

use crate::geojson::{FeatureSet, GeoFeature, Geometry};

/// Property keys probed, in order, for a feature's display label.
const LABEL_KEYS: [&str; 3] = ["PlantName", "name", "NAME"];

/// Projects every feature of `set` into the world as `class`.
///
/// Polygons and multipolygons become one `Area` feature each (all rings
/// concatenated; the even-odd containment test keeps islands and holes
/// correct). Points become one `Marker` each, multipoints one per point.
/// Line geometries are skipped: none of the map's datasets carry them.
///
/// Returns the spawned ids in input order.
pub fn ingest_feature_set(
    world: &mut World,
    set: &FeatureSet,
    class: FeatureClass,
    projection: &AlbersUsa,
) -> Vec<FeatureId> {
    let mut spawned = Vec::with_capacity(set.features.len());

    for feature in &set.features {
        let label = feature_label(feature);
        match &feature.geometry {
            Geometry::Point(p) => {
                let position = projection.project(p.lon_deg, p.lat_deg);
                spawned.push(spawn_marker(world, class, position, label));
            }
            Geometry::MultiPoint(points) => {
                for p in points {
                    let position = projection.project(p.lon_deg, p.lat_deg);
                    spawned.push(spawn_marker(world, class, position, label));
                }
            }
            Geometry::Polygon(rings) => {
                let projected = project_rings(rings, projection);
                if let Some(id) = spawn_area(world, class, projected, label) {
                    spawned.push(id);
                }
            }
            Geometry::MultiPolygon(polys) => {
                let mut projected = Vec::new();
                for poly in polys {
                    projected.extend(project_rings(poly, projection));
                }
                if let Some(id) = spawn_area(world, class, projected, label) {
                    spawned.push(id);
                }
            }
            Geometry::LineString(_) | Geometry::MultiLineString(_) => {}
        }
    }

    spawned
}

fn feature_label(feature: &GeoFeature) -> Option<&str> {
    LABEL_KEYS.iter().find_map(|key| feature.property_str(key))
}

fn project_rings(
    rings: &[Vec<crate::geojson::GeoPoint>],
    projection: &AlbersUsa,
) -> Vec<Vec<Vec2>> {
    rings
        .iter()
        .map(|ring| {
            ring.iter()
                .map(|p| projection.project(p.lon_deg, p.lat_deg))
                .collect()
        })
        .collect()
}

fn spawn_marker(
    world: &mut World,
    class: FeatureClass,
    position: Vec2,
    label: Option<&str>,
) -> FeatureId {
    let mut bounds = Bounds2::empty();
    bounds.expand(position);

    let id = world.spawn();
    world.set_class(id, class);
    world.set_outline(id, Outline::Marker { position });
    world.set_bounds(id, bounds);
    if let Some(label) = label {
        world.set_label(id, label);
    }
    id
}

fn spawn_area(
    world: &mut World,
    class: FeatureClass,
    rings: Vec<Vec<Vec2>>,
    label: Option<&str>,
) -> Option<FeatureId> {
    let mut bounds = Bounds2::empty();
    for ring in &rings {
        for p in ring {
            bounds.expand(*p);
        }
    }
    if bounds.is_empty() {
        return None;
    }

    let id = world.spawn();
    world.set_class(id, class);
    world.set_outline(id, Outline::Area { rings });
    world.set_bounds(id, bounds);
    if let Some(label) = label {
        world.set_label(id, label);
    }
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::ingest_feature_set;
    use crate::geojson::FeatureSet;
    use foundation::math::{AlbersUsa, Vec2};
    use scene::World;
    use scene::feature::{FeatureClass, Outline};

    fn projection() -> AlbersUsa {
        AlbersUsa::new(1300.0, Vec2::new(487.5, 305.0))
    }

    #[test]
    fn polygons_become_bounded_areas() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "California"},
                 "geometry": {"type": "Polygon", "coordinates":
                     [[[-124.4, 32.5], [-114.1, 32.5], [-114.1, 42.0], [-124.4, 42.0], [-124.4, 32.5]]]}}
            ]
        }"#;
        let set = FeatureSet::from_geojson_str(payload).expect("parse");

        let mut world = World::new();
        let ids = ingest_feature_set(&mut world, &set, FeatureClass::Region, &projection());
        assert_eq!(ids.len(), 1);

        let id = ids[0];
        assert_eq!(world.class(id), Some(FeatureClass::Region));
        assert_eq!(world.label(id), Some("California"));

        let bounds = world.bounds(id).expect("bounds");
        assert!(!bounds.is_degenerate());
        // California sits in the left half of the projected USA.
        assert!(bounds.max.x < 487.5);
        assert!(bounds.min.x > -200.0);
    }

    #[test]
    fn points_become_degenerate_markers() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"PlantName": "Diablo Canyon"},
                 "geometry": {"type": "Point", "coordinates": [-120.85, 35.21]}}
            ]
        }"#;
        let set = FeatureSet::from_geojson_str(payload).expect("parse");

        let mut world = World::new();
        let ids = ingest_feature_set(
            &mut world,
            &set,
            FeatureClass::PointOfInterest,
            &projection(),
        );
        assert_eq!(ids.len(), 1);

        let id = ids[0];
        assert_eq!(world.label(id), Some("Diablo Canyon"));
        assert!(world.bounds(id).expect("bounds").is_degenerate());
        assert!(matches!(world.outline(id), Some(Outline::Marker { .. })));
    }

    #[test]
    fn multipoint_explodes_into_one_marker_per_point() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"PlantName": "Twin Units"},
                 "geometry": {"type": "MultiPoint", "coordinates": [[-120.0, 35.0], [-120.1, 35.1]]}}
            ]
        }"#;
        let set = FeatureSet::from_geojson_str(payload).expect("parse");

        let mut world = World::new();
        let ids = ingest_feature_set(
            &mut world,
            &set,
            FeatureClass::PointOfInterest,
            &projection(),
        );
        assert_eq!(ids.len(), 2);
        assert_eq!(world.label(ids[0]), Some("Twin Units"));
        assert_eq!(world.label(ids[1]), Some("Twin Units"));
    }

    #[test]
    fn multipolygon_rings_collapse_into_one_area() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"NAME": "Channel Islands"},
                 "geometry": {"type": "MultiPolygon", "coordinates": [
                     [[[-119.9, 34.0], [-119.5, 34.0], [-119.5, 34.1], [-119.9, 34.1], [-119.9, 34.0]]],
                     [[[-120.4, 34.0], [-120.0, 34.0], [-120.0, 34.1], [-120.4, 34.1], [-120.4, 34.0]]]
                 ]}}
            ]
        }"#;
        let set = FeatureSet::from_geojson_str(payload).expect("parse");

        let mut world = World::new();
        let ids = ingest_feature_set(&mut world, &set, FeatureClass::Region, &projection());
        assert_eq!(ids.len(), 1);

        let Some(Outline::Area { rings }) = world.outline(ids[0]) else {
            panic!("expected area outline");
        };
        assert_eq!(rings.len(), 2);
        assert_eq!(world.label(ids[0]), Some("Channel Islands"));
    }

    #[test]
    fn label_precedence_prefers_plant_name() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature",
                 "properties": {"NAME": "upper", "name": "lower", "PlantName": "plant"},
                 "geometry": {"type": "Point", "coordinates": [-120.0, 35.0]}}
            ]
        }"#;
        let set = FeatureSet::from_geojson_str(payload).expect("parse");

        let mut world = World::new();
        let ids = ingest_feature_set(
            &mut world,
            &set,
            FeatureClass::PointOfInterest,
            &projection(),
        );
        assert_eq!(world.label(ids[0]), Some("plant"));
    }

    #[test]
    fn line_geometries_are_skipped() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "LineString", "coordinates": [[-120.0, 35.0], [-119.0, 36.0]]}}
            ]
        }"#;
        let set = FeatureSet::from_geojson_str(payload).expect("parse");

        let mut world = World::new();
        let ids = ingest_feature_set(&mut world, &set, FeatureClass::Region, &projection());
        assert!(ids.is_empty());
        assert!(world.is_empty());
    }
}
