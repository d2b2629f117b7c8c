//! Proportional sectors

use std::f64::consts::{FRAC_PI_2, TAU};

use super::surface::{Color, DrawCommand, Point, Surface, TextAlign};

/// Distance of percentage labels beyond the rim
const LABEL_OFFSET: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PieEntry {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

impl PieEntry {
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// Angular extent of one entry, in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub start: f64,
    pub sweep: f64,
    /// Share of the total in [0, 1]
    pub share: f64,
}

impl Sector {
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }

    pub fn bisector(&self) -> f64 {
        self.start + self.sweep / 2.0
    }
}

/// Sweep entries clockwise from the top
///
/// Negative values count as zero. Returns no sectors when nothing is
/// positive.
pub fn sectors(entries: &[PieEntry]) -> Vec<Sector> {
    let total: f64 = entries.iter().map(|e| e.value.max(0.0)).sum();
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    entries
        .iter()
        .map(|entry| {
            let share = entry.value.max(0.0) / total;
            let sector = Sector {
                start: angle,
                sweep: share * TAU,
                share,
            };
            angle += sector.sweep;
            sector
        })
        .collect()
}

/// Filled slices with percentage labels outside the rim
pub fn pie(surface: &mut dyn Surface, entries: &[PieEntry], text: Color) {
    let (width, height) = (surface.width(), surface.height());
    surface.draw(DrawCommand::Clear);

    let center = Point::new(width / 2.0, height / 2.0);
    let radius = (width.min(height) / 2.0 - 30.0).max(0.0);

    for (entry, sector) in entries.iter().zip(sectors(entries)) {
        surface.draw(DrawCommand::Sector {
            center,
            radius,
            start: sector.start,
            end: sector.end(),
            color: entry.color,
        });

        let label_angle = sector.bisector();
        let reach = radius + LABEL_OFFSET;
        surface.draw(DrawCommand::Text {
            text: format!("{}%", (sector.share * 100.0).round()),
            at: Point::new(
                center.x + label_angle.cos() * reach,
                center.y + label_angle.sin() * reach,
            ),
            align: TextAlign::Center,
            color: text,
        });
    }
}
