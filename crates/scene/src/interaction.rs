use foundation::bounds::Bounds2;
use foundation::math::Vec2;

use crate::feature::{FeatureClass, FeatureId, Outline};
use crate::focus::{FocusController, ViewTransform};
use crate::picking::{PickOptions, pick_class};
use crate::world::World;

/// Discrete pointer input in screen coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Click { x: f64, y: f64 },
    DoubleClick { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Leave,
}

/// Point of interest under the pointer, with the pointer position it was
/// observed at (for tooltip placement).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HoverTarget {
    pub feature: FeatureId,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

/// What a routed event asks the presentation layer to do.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RoutedEvent {
    /// Animate to the new view transform.
    Animate(ViewTransform),
    /// Hover state over point-of-interest markers; `None` hides the tooltip.
    Hover(Option<HoverTarget>),
}

/// Routes pointer events with explicit feature-first consumption priority:
/// a click that hits a region focuses it and consumes the event; any other
/// click falls through to the background and resets the view. Double-click
/// resets from anywhere. Subregions never participate; moves drive hover
/// over point-of-interest markers only.
pub fn route_pointer(
    world: &World,
    focus: &mut FocusController,
    event: PointerEvent,
) -> RoutedEvent {
    match event {
        PointerEvent::Click { x, y } => {
            let plane = focus.transform().invert(Vec2::new(x, y));
            match pick_class(world, FeatureClass::Region, plane, PickOptions::default()) {
                Some(hit) => {
                    let bounds = world
                        .bounds(hit.feature)
                        .unwrap_or_else(|| outline_bounds(world.outline(hit.feature)));
                    RoutedEvent::Animate(focus.focus(hit.feature, bounds))
                }
                None => RoutedEvent::Animate(focus.reset()),
            }
        }
        PointerEvent::DoubleClick { .. } => RoutedEvent::Animate(focus.reset()),
        PointerEvent::Move { x, y } => {
            let plane = focus.transform().invert(Vec2::new(x, y));
            let hover = pick_class(
                world,
                FeatureClass::PointOfInterest,
                plane,
                PickOptions::default(),
            )
            .map(|hit| HoverTarget {
                feature: hit.feature,
                pointer_x: x,
                pointer_y: y,
            });
            RoutedEvent::Hover(hover)
        }
        PointerEvent::Leave => RoutedEvent::Hover(None),
    }
}

/// Bounds recomputed from an outline, for features ingested without them.
fn outline_bounds(outline: Option<&Outline>) -> Bounds2 {
    let mut bounds = Bounds2::empty();
    match outline {
        Some(Outline::Area { rings }) => {
            for ring in rings {
                for p in ring {
                    bounds.expand(*p);
                }
            }
        }
        Some(Outline::Marker { position }) => bounds.expand(*position),
        None => {}
    }
    bounds
}
