use foundation::math::{AlbersUsa, Vec2};
use layers::svg::SvgSurface;
use layers::symbology::Symbology;
use layers::tooltip::{TooltipState, tooltip_for};
use layers::transition::Transition;
use scene::World;
use scene::feature::FeatureClass;
use scene::focus::FocusController;
use scene::interaction::{PointerEvent, RoutedEvent, route_pointer};

use crate::sources::MapData;

/// Fixed projection scale for the USA view.
const PROJECTION_SCALE: f64 = 1300.0;

/// What a pointer event produced for the embedding shell: at most one of a
/// view transition to run or a tooltip update to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerResponse {
    pub transition: Option<Transition>,
    pub tooltip: Option<TooltipState>,
}

/// The mounted map component: scene, focus state and render surface.
///
/// All methods are synchronous; the app owns its `FocusController`
/// exclusively and is never shared.
#[derive(Debug)]
pub struct MapApp {
    world: World,
    focus: FocusController,
    symbology: Symbology,
    surface: SvgSurface,
}

impl MapApp {
    /// Builds the scene from loaded data under a projection centered on
    /// the viewport.
    pub fn new(data: &MapData, width: f64, height: f64) -> Self {
        let projection = AlbersUsa::new(PROJECTION_SCALE, Vec2::new(width / 2.0, height / 2.0));

        let mut world = World::new();
        // Ingest in draw order; ids double as the picking tie-break.
        formats::ingest_feature_set(
            &mut world,
            &data.subregions,
            FeatureClass::Subregion,
            &projection,
        );
        formats::ingest_feature_set(&mut world, &data.regions, FeatureClass::Region, &projection);
        formats::ingest_feature_set(
            &mut world,
            &data.pois,
            FeatureClass::PointOfInterest,
            &projection,
        );

        Self {
            world,
            focus: FocusController::new(width, height),
            symbology: Symbology::default(),
            surface: SvgSurface::new(width, height),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    /// Routes a pointer event. Focus and reset responses come back as
    /// transitions starting from the previously displayed transform; hover
    /// responses come back as tooltip updates.
    pub fn pointer(&mut self, event: PointerEvent) -> PointerResponse {
        let from = self.focus.transform();
        match route_pointer(&self.world, &mut self.focus, event) {
            RoutedEvent::Animate(to) => PointerResponse {
                transition: Some(Transition::focus(from, to)),
                tooltip: None,
            },
            RoutedEvent::Hover(hover) => PointerResponse {
                transition: None,
                tooltip: Some(tooltip_for(&self.world, hover)),
            },
        }
    }

    /// Focuses the region with the given label. Returns false when no such
    /// region exists.
    pub fn focus_labeled(&mut self, label: &str) -> bool {
        let Some(id) = self.world.find_labeled(FeatureClass::Region, label) else {
            return false;
        };
        let Some(bounds) = self.world.bounds(id) else {
            return false;
        };
        self.focus.focus(id, bounds);
        true
    }

    pub fn render(&self) -> String {
        self.surface.render(
            &self.world,
            self.focus.transform(),
            self.focus.selected(),
            &self.symbology,
        )
    }
}
