use foundation::math::Vec2;

use crate::focus::{MAX_SCALE, MIN_SCALE, ViewTransform};

/// Wheel delta to zoom factor exponent, matching the usual wheel-zoom
/// feel: ~500 units of wheel travel per doubling.
const WHEEL_ZOOM_RATE: f64 = 0.002;

/// Turns raw drag/wheel input into clamped view transforms.
///
/// This layer owns the scale contract: every transform it emits satisfies
/// `k` in `[MIN_SCALE, MAX_SCALE]`, so the focus controller can adopt them
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureHandler {
    transform: ViewTransform,
    dragging: bool,
    last_pos: Vec2,
}

impl Default for GestureHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureHandler {
    pub fn new() -> Self {
        Self {
            transform: ViewTransform::identity(),
            dragging: false,
            last_pos: Vec2::new(0.0, 0.0),
        }
    }

    /// Seeds the handler from the current view, e.g. after a focus
    /// transition lands, so the next gesture continues from there.
    pub fn sync(&mut self, transform: ViewTransform) {
        self.transform = transform;
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        self.dragging = true;
        self.last_pos = pos;
    }

    /// Returns the updated transform while a drag is in progress.
    pub fn on_pointer_move(&mut self, pos: Vec2) -> Option<ViewTransform> {
        if !self.dragging {
            return None;
        }
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        self.transform.x += delta.x;
        self.transform.y += delta.y;
        Some(self.transform)
    }

    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Wheel zoom about the cursor; positive delta zooms out. The plane
    /// point under the cursor stays fixed unless the clamp engages.
    pub fn on_wheel(&mut self, pos: Vec2, delta: f64) -> ViewTransform {
        let factor = 2f64.powf(-delta * WHEEL_ZOOM_RATE);
        let k = (self.transform.k * factor).clamp(MIN_SCALE, MAX_SCALE);
        let ratio = k / self.transform.k;

        self.transform = ViewTransform::new(
            pos.x - ratio * (pos.x - self.transform.x),
            pos.y - ratio * (pos.y - self.transform.y),
            k,
        );
        self.transform
    }
}
