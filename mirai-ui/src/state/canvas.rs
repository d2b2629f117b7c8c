//! Canvas Surface
//!
//! Replays chart draw commands on an HTML5 canvas.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use mirai::chart::surface::LABEL_FONT;
use mirai::chart::{Color, DrawCommand, Gradient, Point, Surface, TextAlign};

/// A canvas's 2d context sized to the element's pixel dimensions
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    fn trace(&self, points: &[Point]) {
        self.ctx.begin_path();
        for (i, point) in points.iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(point.x, point.y);
            } else {
                self.ctx.line_to(point.x, point.y);
            }
        }
    }

    fn fill_with(&self, color: Color) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn draw(&mut self, command: DrawCommand) {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear => ctx.clear_rect(0.0, 0.0, self.width, self.height),
            DrawCommand::Polyline {
                points,
                color,
                width,
            } => {
                ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
                ctx.set_line_width(width);
                self.trace(&points);
                ctx.stroke();
            }
            DrawCommand::Polygon {
                points,
                fill: Gradient { top, bottom },
            } => {
                let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, self.height);
                let _ = gradient.add_color_stop(0.0, &top.to_css());
                let _ = gradient.add_color_stop(1.0, &bottom.to_css());
                ctx.set_fill_style(&gradient);
                self.trace(&points);
                ctx.close_path();
                ctx.fill();
            }
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                self.fill_with(color);
                ctx.fill_rect(x, y, width, height);
            }
            DrawCommand::Sector {
                center,
                radius,
                start,
                end,
                color,
            } => {
                self.fill_with(color);
                ctx.begin_path();
                ctx.move_to(center.x, center.y);
                let _ = ctx.arc(center.x, center.y, radius, start, end);
                ctx.close_path();
                ctx.fill();
            }
            DrawCommand::Text {
                text,
                at,
                align,
                color,
            } => {
                self.fill_with(color);
                ctx.set_font(LABEL_FONT);
                ctx.set_text_align(match align {
                    TextAlign::Left => "left",
                    TextAlign::Center => "center",
                });
                let _ = ctx.fill_text(&text, at.x, at.y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_surface_takes_canvas_size() {
        let canvas: HtmlCanvasElement = leptos::document()
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(120);
        canvas.set_height(40);

        let mut surface = CanvasSurface::new(&canvas).unwrap();
        assert_eq!(surface.width(), 120.0);
        assert_eq!(surface.height(), 40.0);
        surface.draw(DrawCommand::Clear);
    }
}
