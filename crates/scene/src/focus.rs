use foundation::bounds::Bounds2;
use foundation::math::Vec2;

use crate::feature::FeatureId;

/// Scale floor enforced by the gesture layer.
pub const MIN_SCALE: f64 = 1.0;

/// Scale ceiling enforced by the gesture layer.
pub const MAX_SCALE: f64 = 8.0;

/// Cap applied to click-to-focus zoom.
pub const MAX_FOCUS_SCALE: f64 = 2.0;

/// Fraction of the viewport a focused feature may occupy; the remainder
/// stays as visual padding around it.
pub const MARGIN_FACTOR: f64 = 0.9;

/// Mapping from projected-plane coordinates to screen coordinates:
/// `screen = plane * k + (x, y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl ViewTransform {
    pub fn new(x: f64, y: f64, k: f64) -> Self {
        Self { x, y, k }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub fn is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.k == 1.0
    }

    pub fn apply(&self, plane: Vec2) -> Vec2 {
        Vec2::new(plane.x * self.k + self.x, plane.y * self.k + self.y)
    }

    pub fn invert(&self, screen: Vec2) -> Vec2 {
        Vec2::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
    }
}

/// Owns the selected feature and the current view transform, and turns
/// discrete interactions into consistent transforms.
///
/// State machine: `Overview` (no selection) and `Focused(id)`. A click on a
/// feature focuses it (direct reselection allowed), double-click or a
/// background click resets to overview, and free pan/zoom gestures update
/// the transform without touching the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusController {
    viewport_width: f64,
    viewport_height: f64,
    selected: Option<FeatureId>,
    transform: ViewTransform,
}

impl FocusController {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport_width,
            viewport_height,
            selected: None,
            transform: ViewTransform::identity(),
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width.max(1.0);
        self.viewport_height = height.max(1.0);
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn selected(&self) -> Option<FeatureId> {
        self.selected
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn is_overview(&self) -> bool {
        self.selected.is_none()
    }

    /// Frames `bounds` in the viewport and selects `feature`, replacing any
    /// prior selection.
    ///
    /// The scale fits the bounds at `MARGIN_FACTOR` of the viewport, capped
    /// at `MAX_FOCUS_SCALE`. A point feature has zero extent on both axes;
    /// its scale term is unbounded and the cap wins.
    pub fn focus(&mut self, feature: FeatureId, bounds: Bounds2) -> ViewTransform {
        let extent = (bounds.width() / self.viewport_width)
            .max(bounds.height() / self.viewport_height);
        let k = if extent > 0.0 {
            (MARGIN_FACTOR / extent).min(MAX_FOCUS_SCALE)
        } else {
            MAX_FOCUS_SCALE
        };

        let center = bounds.center();
        let transform = ViewTransform::new(
            self.viewport_width / 2.0 - k * center.x,
            self.viewport_height / 2.0 - k * center.y,
            k,
        );

        self.selected = Some(feature);
        self.transform = transform;
        transform
    }

    /// Returns to the overview: identity transform, no selection.
    /// Idempotent.
    pub fn reset(&mut self) -> ViewTransform {
        self.selected = None;
        self.transform = ViewTransform::identity();
        self.transform
    }

    /// Adopts a free-gesture transform verbatim. The gesture layer owns the
    /// `[MIN_SCALE, MAX_SCALE]` clamp; no re-clamping happens here, and the
    /// selection is left alone.
    pub fn on_user_zoom_or_pan(&mut self, raw: ViewTransform) -> ViewTransform {
        self.transform = raw;
        raw
    }
}
