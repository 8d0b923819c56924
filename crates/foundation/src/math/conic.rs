use crate::math::Vec2;

/// Spherical conic equal-area (Albers) projection.
///
/// Configuration mirrors the usual cartographic setup: two standard
/// parallels, a longitude rotation applied before projecting, a center
/// expressed in rotated coordinates, and a scale/translate pair that maps
/// the raw projection onto screen pixels. Screen y grows downward, so the
/// raw y axis is flipped around the center.
///
/// The parallels must not be symmetric about the equator (`n != 0`); all
/// configurations in this workspace satisfy that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConicEqualArea {
    n: f64,
    c: f64,
    r0: f64,
    rotate_deg: f64,
    center: Vec2,
    scale: f64,
    translate: Vec2,
}

impl ConicEqualArea {
    pub fn new(
        parallels_deg: [f64; 2],
        rotate_deg: f64,
        center_lon_lat_deg: [f64; 2],
        scale: f64,
        translate: Vec2,
    ) -> Self {
        let sy0 = parallels_deg[0].to_radians().sin();
        let n = (sy0 + parallels_deg[1].to_radians().sin()) / 2.0;
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        let r0 = c.sqrt() / n;

        let mut projection = Self {
            n,
            c,
            r0,
            rotate_deg,
            center: Vec2::new(0.0, 0.0),
            scale,
            translate,
        };
        // The center is given in rotated coordinates and is not rotated again.
        projection.center = projection.raw(center_lon_lat_deg[0], center_lon_lat_deg[1]);
        projection
    }

    /// Projects geographic coordinates (degrees) to screen coordinates.
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> Vec2 {
        let rotated = normalize_lon_deg(lon_deg + self.rotate_deg);
        let p = self.raw(rotated, lat_deg);
        Vec2::new(
            self.translate.x + self.scale * (p.x - self.center.x),
            self.translate.y - self.scale * (p.y - self.center.y),
        )
    }

    /// Raw Albers projection of rotated coordinates, unscaled.
    fn raw(&self, lon_deg: f64, lat_deg: f64) -> Vec2 {
        let r = (self.c - 2.0 * self.n * lat_deg.to_radians().sin()).sqrt() / self.n;
        let theta = self.n * lon_deg.to_radians();
        Vec2::new(r * theta.sin(), self.r0 - r * theta.cos())
    }
}

fn normalize_lon_deg(mut lon: f64) -> f64 {
    while lon > 180.0 {
        lon -= 360.0;
    }
    while lon < -180.0 {
        lon += 360.0;
    }
    lon
}
