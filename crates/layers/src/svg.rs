use scene::World;
use scene::feature::{FeatureClass, FeatureId, MARKER_RADIUS, Outline};
use scene::focus::ViewTransform;

use crate::feature_layer::{ExtractedFeature, FeatureLayer};
use crate::symbology::{ClassStyle, Symbology};

/// Scalable vector render surface.
///
/// Subregions draw first, then regions, then point markers, so markers
/// stay on top. The draw group carries the view transform and a stroke
/// width of `1/k`, so outlines keep their apparent weight while zoomed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SvgSurface {
    pub width: f64,
    pub height: f64,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn render(
        &self,
        world: &World,
        transform: ViewTransform,
        selected: Option<FeatureId>,
        symbology: &Symbology,
    ) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">\n",
            fmt(self.width),
            fmt(self.height),
            fmt(self.width),
            fmt(self.height)
        ));
        out.push_str(&format!(
            "  <g transform=\"translate({},{}) scale({})\" stroke-width=\"{}\">\n",
            fmt(transform.x),
            fmt(transform.y),
            fmt(transform.k),
            fmt(1.0 / transform.k)
        ));

        for class in [
            FeatureClass::Subregion,
            FeatureClass::Region,
            FeatureClass::PointOfInterest,
        ] {
            let layer = FeatureLayer::new(class as u64, class);
            let style = symbology.style(class);
            for extracted in layer.extract(world).features {
                self.render_feature(&mut out, &extracted, class, style, selected, symbology);
            }
        }

        out.push_str("  </g>\n</svg>\n");
        out
    }

    fn render_feature(
        &self,
        out: &mut String,
        extracted: &ExtractedFeature,
        class: FeatureClass,
        style: ClassStyle,
        selected: Option<FeatureId>,
        symbology: &Symbology,
    ) {
        let class_name = match class {
            FeatureClass::Region => "region",
            FeatureClass::Subregion => "subregion",
            FeatureClass::PointOfInterest => "poi",
        };

        match &extracted.outline {
            Outline::Area { rings } => {
                let fill = if selected == Some(extracted.feature) {
                    symbology.selected_fill
                } else {
                    style.fill
                };
                out.push_str(&format!(
                    "    <path class=\"{class_name}\" data-feature-id=\"{}\"",
                    extracted.feature.index()
                ));
                if let Some(label) = &extracted.label {
                    out.push_str(&format!(" data-name=\"{}\"", escape(label)));
                }
                out.push_str(&format!(
                    " d=\"{}\" fill=\"{fill}\" stroke=\"{}\"/>\n",
                    path_data(rings),
                    style.stroke
                ));
            }
            Outline::Marker { position } => {
                out.push_str(&format!(
                    "    <circle class=\"{class_name}\" data-feature-id=\"{}\"",
                    extracted.feature.index()
                ));
                if let Some(label) = &extracted.label {
                    out.push_str(&format!(" data-name=\"{}\"", escape(label)));
                }
                out.push_str(&format!(
                    " cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                    fmt(position.x),
                    fmt(position.y),
                    fmt(MARKER_RADIUS),
                    style.fill
                ));
            }
        }
    }
}

fn path_data(rings: &[Vec<foundation::math::Vec2>]) -> String {
    let mut d = String::new();
    for ring in rings {
        let mut points = ring.iter();
        let Some(first) = points.next() else {
            continue;
        };
        d.push_str(&format!("M{},{}", fmt(first.x), fmt(first.y)));
        for p in points {
            d.push_str(&format!("L{},{}", fmt(p.x), fmt(p.y)));
        }
        d.push('Z');
    }
    d
}

/// Trims trailing zeros from a two-decimal rendering, so whole numbers
/// print bare.
fn fmt(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::SvgSurface;
    use crate::symbology::Symbology;
    use foundation::math::Vec2;
    use scene::World;
    use scene::feature::{FeatureClass, FeatureId, Outline};
    use scene::focus::ViewTransform;

    fn demo_world() -> World {
        let mut world = World::new();

        let county = world.spawn();
        world.set_class(county, FeatureClass::Subregion);
        world.set_outline(
            county,
            Outline::Area {
                rings: vec![vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(5.0, 0.0),
                    Vec2::new(5.0, 5.0),
                ]],
            },
        );

        let state = world.spawn();
        world.set_class(state, FeatureClass::Region);
        world.set_outline(
            state,
            Outline::Area {
                rings: vec![vec![
                    Vec2::new(10.0, 10.0),
                    Vec2::new(20.0, 10.0),
                    Vec2::new(20.0, 20.0),
                ]],
            },
        );
        world.set_label(state, "California");

        let plant = world.spawn();
        world.set_class(plant, FeatureClass::PointOfInterest);
        world.set_outline(
            plant,
            Outline::Marker {
                position: Vec2::new(15.0, 15.0),
            },
        );
        world.set_label(plant, "Moss Landing");

        world
    }

    #[test]
    fn group_carries_transform_and_compensated_stroke() {
        let world = demo_world();
        let svg = SvgSurface::new(975.0, 610.0).render(
            &world,
            ViewTransform::new(187.5, 55.0, 2.0),
            None,
            &Symbology::default(),
        );

        assert!(svg.contains("transform=\"translate(187.5,55) scale(2)\""));
        assert!(svg.contains("stroke-width=\"0.5\""));
    }

    #[test]
    fn draw_order_is_subregion_region_marker() {
        let world = demo_world();
        let svg = SvgSurface::new(975.0, 610.0).render(
            &world,
            ViewTransform::identity(),
            None,
            &Symbology::default(),
        );

        let county = svg.find("class=\"subregion\"").expect("subregion");
        let state = svg.find("class=\"region\"").expect("region");
        let plant = svg.find("class=\"poi\"").expect("poi");
        assert!(county < state && state < plant);

        assert!(svg.contains("<circle class=\"poi\""));
        assert!(svg.contains("r=\"4.5\""));
    }

    #[test]
    fn selected_region_is_highlighted() {
        let world = demo_world();
        let surface = SvgSurface::new(975.0, 610.0);
        let symbology = Symbology::default();

        let plain = surface.render(&world, ViewTransform::identity(), None, &symbology);
        assert!(!plain.contains("maroon"));

        let focused = surface.render(
            &world,
            ViewTransform::identity(),
            Some(FeatureId(1)),
            &symbology,
        );
        assert!(focused.contains("fill=\"maroon\""));
        assert!(focused.contains("data-name=\"California\""));
    }

    #[test]
    fn path_data_closes_each_ring() {
        let world = demo_world();
        let svg = SvgSurface::new(975.0, 610.0).render(
            &world,
            ViewTransform::identity(),
            None,
            &Symbology::default(),
        );
        assert!(svg.contains("d=\"M10,10L20,10L20,20Z\""));
    }

    #[test]
    fn labels_are_xml_escaped() {
        let mut world = World::new();
        let state = world.spawn();
        world.set_class(state, FeatureClass::Region);
        world.set_outline(
            state,
            Outline::Area {
                rings: vec![vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(1.0, 0.0),
                    Vec2::new(1.0, 1.0),
                ]],
            },
        );
        world.set_label(state, "Lewis & Clark");

        let svg = SvgSurface::new(100.0, 100.0).render(
            &world,
            ViewTransform::identity(),
            None,
            &Symbology::default(),
        );
        assert!(svg.contains("data-name=\"Lewis &amp; Clark\""));
    }
}
