//! Categorical bars and OHLC candles

use super::surface::{Color, DrawCommand, Point, Surface, TextAlign};

/// Horizontal gap subtracted from each category slot
const BAR_GAP: f64 = 20.0;

/// One synthetic OHLC slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl Candle {
    pub fn is_up(&self) -> bool {
        self.close > self.open
    }
}

/// Labelled bars, colored by cycling through `palette`
pub fn category_bars(
    surface: &mut dyn Surface,
    bars: &[(&str, f64)],
    palette: &[Color],
    text: Color,
) {
    let (width, height) = (surface.width(), surface.height());
    surface.draw(DrawCommand::Clear);
    if bars.is_empty() || palette.is_empty() {
        return;
    }

    let slot = width / bars.len() as f64;
    let bar_width = slot - BAR_GAP;
    let max = bars.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);

    for (index, (label, value)) in bars.iter().enumerate() {
        let bar_height = if max > 0.0 {
            value / max * (height - 40.0)
        } else {
            0.0
        };
        let x = index as f64 * slot + 10.0;
        let y = height - bar_height - 20.0;

        surface.draw(DrawCommand::Rect {
            x,
            y,
            width: bar_width,
            height: bar_height,
            color: palette[index % palette.len()],
        });
        surface.draw(DrawCommand::Text {
            text: label.to_string(),
            at: Point::new(x + bar_width / 2.0, height - 5.0),
            align: TextAlign::Center,
            color: text,
        });
    }
}

/// Wick plus body per slot, on a fixed [0, 200] price scale
pub fn candles(surface: &mut dyn Surface, data: &[Candle], up: Color, down: Color) {
    let (width, height) = (surface.width(), surface.height());
    surface.draw(DrawCommand::Clear);
    if data.is_empty() {
        return;
    }

    let slot = width / data.len() as f64;
    let bar_width = slot - 2.0;
    let scale = height / 200.0;

    for (index, candle) in data.iter().enumerate() {
        let x = index as f64 * slot + bar_width / 2.0;
        let color = if candle.is_up() { up } else { down };

        let high_y = height - candle.high * scale;
        let low_y = height - candle.low * scale;
        let open_y = height - candle.open * scale;
        let close_y = height - candle.close * scale;

        surface.draw(DrawCommand::Polyline {
            points: vec![Point::new(x, high_y), Point::new(x, low_y)],
            color,
            width: 1.0,
        });
        surface.draw(DrawCommand::Rect {
            x: x - bar_width / 4.0,
            y: open_y.min(close_y),
            width: bar_width / 2.0,
            height: (close_y - open_y).abs(),
            color,
        });
    }
}
