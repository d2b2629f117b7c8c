//! Line, area and multi-series overlay layouts

use super::surface::{Color, DrawCommand, Gradient, Point, Surface, TextAlign};

/// Legend swatch and label placement for [`overlay`]
const LEGEND_START_X: f64 = 10.0;
const LEGEND_SPACING: f64 = 80.0;
const LEGEND_Y: f64 = 10.0;

/// A named series drawn by [`overlay`]
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Color,
}

/// Map samples onto the surface: `x = i/(n-1) * width`,
/// `y = height - value/domain_max * height`
pub fn scale_points(values: &[f64], domain_max: f64, width: f64, height: f64) -> Vec<Point> {
    let last = values.len().saturating_sub(1).max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = i as f64 / last * width;
            let y = height - (value / domain_max) * height;
            Point::new(x, y)
        })
        .collect()
}

/// Single metric as a stroked polyline
pub fn line_series(surface: &mut dyn Surface, values: &[f64], domain_max: f64, color: Color) {
    surface.draw(DrawCommand::Clear);
    let points = scale_points(values, domain_max, surface.width(), surface.height());
    surface.draw(DrawCommand::Polyline {
        points,
        color,
        width: 2.0,
    });
}

/// Single metric as a gradient-filled area with the line on top
pub fn area_series(surface: &mut dyn Surface, values: &[f64], domain_max: f64, base: Color) {
    let (width, height) = (surface.width(), surface.height());
    surface.draw(DrawCommand::Clear);

    let line = scale_points(values, domain_max, width, height);

    let mut outline = Vec::with_capacity(line.len() + 2);
    outline.push(Point::new(0.0, height));
    outline.extend(line.iter().copied());
    outline.push(Point::new(width, height));

    surface.draw(DrawCommand::Polygon {
        points: outline,
        fill: Gradient {
            top: base.with_alpha(0.5),
            bottom: base.with_alpha(0.1),
        },
    });
    surface.draw(DrawCommand::Polyline {
        points: line,
        color: base,
        width: 2.0,
    });
}

/// Several series on a shared [0, 100] scale with a legend along the top
pub fn overlay(surface: &mut dyn Surface, series: &[NamedSeries], text: Color) {
    let (width, height) = (surface.width(), surface.height());
    surface.draw(DrawCommand::Clear);

    for s in series {
        surface.draw(DrawCommand::Polyline {
            points: scale_points(&s.values, 100.0, width, height),
            color: s.color,
            width: 2.0,
        });
    }

    let mut legend_x = LEGEND_START_X;
    for s in series {
        surface.draw(DrawCommand::Rect {
            x: legend_x,
            y: LEGEND_Y,
            width: 15.0,
            height: 3.0,
            color: s.color,
        });
        surface.draw(DrawCommand::Text {
            text: s.name.clone(),
            at: Point::new(legend_x + 20.0, 15.0),
            align: TextAlign::Left,
            color: text,
        });
        legend_x += LEGEND_SPACING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::RecordingSurface;

    #[test]
    fn test_scale_points() {
        let points = scale_points(&[0.0, 30.0, 60.0], 60.0, 200.0, 100.0);
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 100.0),
                Point::new(100.0, 50.0),
                Point::new(200.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_single_sample_stays_finite() {
        let points = scale_points(&[10.0], 20.0, 100.0, 100.0);
        assert_eq!(points, vec![Point::new(0.0, 50.0)]);
    }

    #[test]
    fn test_area_polygon_closes_on_baseline() {
        let mut surface = RecordingSurface::new(300.0, 150.0);
        area_series(&mut surface, &[150.0, 150.0], 300.0, Color::hex(0x1cd4af));

        match &surface.commands()[1] {
            DrawCommand::Polygon { points, fill } => {
                assert_eq!(points.first(), Some(&Point::new(0.0, 150.0)));
                assert_eq!(points.last(), Some(&Point::new(300.0, 150.0)));
                assert_eq!(points[1], Point::new(0.0, 75.0));
                assert_eq!((fill.top.a, fill.bottom.a), (0.5, 0.1));
            }
            other => panic!("expected polygon, got {:?}", other),
        }
        assert!(matches!(surface.commands()[2], DrawCommand::Polyline { .. }));
    }

    #[test]
    fn test_overlay_legend_spacing() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        let series: Vec<_> = ["CPU", "RAM", "Disk"]
            .iter()
            .map(|name| NamedSeries {
                name: name.to_string(),
                values: vec![50.0; 30],
                color: Color::hex(0x6e56cf),
            })
            .collect();
        overlay(&mut surface, &series, Color::hex(0xffffff));

        let swatches: Vec<f64> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(swatches, vec![10.0, 90.0, 170.0]);
        assert_eq!(surface.texts(), vec!["CPU", "RAM", "Disk"]);
    }
}
