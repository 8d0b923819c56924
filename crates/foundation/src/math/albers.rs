use crate::math::conic::ConicEqualArea;
use crate::math::Vec2;

/// Composite USA projector: an Albers projection of the lower 48 states
/// with Alaska and Hawaii insets placed below the mainland.
///
/// Forward routing picks the sub-projection from a geographic region test
/// rather than probing clip extents; the boxes are generous enough to cover
/// every feature of the shipped datasets, including the far Aleutians on
/// the other side of the antimeridian.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AlbersUsa {
    lower48: ConicEqualArea,
    alaska: ConicEqualArea,
    hawaii: ConicEqualArea,
}

impl AlbersUsa {
    pub fn new(scale: f64, translate: Vec2) -> Self {
        let k = scale;
        Self {
            lower48: ConicEqualArea::new([29.5, 45.5], 96.0, [-0.6, 38.7], k, translate),
            // Alaska is rendered at 0.35x, lower-left of the mainland.
            alaska: ConicEqualArea::new(
                [55.0, 65.0],
                154.0,
                [-2.0, 58.5],
                k * 0.35,
                Vec2::new(translate.x - 0.307 * k, translate.y + 0.201 * k),
            ),
            hawaii: ConicEqualArea::new(
                [8.0, 18.0],
                157.0,
                [-3.0, 19.9],
                k,
                Vec2::new(translate.x - 0.205 * k, translate.y + 0.212 * k),
            ),
        }
    }

    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> Vec2 {
        if lat_deg >= 50.0 && (lon_deg <= -128.0 || lon_deg >= 170.0) {
            self.alaska.project(lon_deg, lat_deg)
        } else if lat_deg < 30.0 && lon_deg <= -140.0 {
            self.hawaii.project(lon_deg, lat_deg)
        } else {
            self.lower48.project(lon_deg, lat_deg)
        }
    }
}
