//! Drawing surfaces
//!
//! Charts never talk to a canvas directly. They emit [`DrawCommand`]s into a
//! [`Surface`] of known pixel size; the browser frontend replays them on a
//! `CanvasRenderingContext2d`, while [`RecordingSurface`] keeps them for
//! tests and for the headless `render` command.

use serde::Serialize;
use std::fmt;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    /// Opaque color from a 0xRRGGBB literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS representation accepted by canvas style setters
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// A point in surface pixels (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear gradient from the top of the surface to the bottom
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gradient {
    pub top: Color,
    pub bottom: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
}

/// Font used for all chart labels
pub const LABEL_FONT: &str = "12px Inter";

/// One drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    Polyline {
        points: Vec<Point>,
        color: Color,
        width: f64,
    },
    Polygon {
        points: Vec<Point>,
        fill: Gradient,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    /// Pie slice from the center, angles in radians, clockwise
    Sector {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        color: Color,
    },
    Text {
        text: String,
        at: Point,
        align: TextAlign,
        color: Color,
    },
}

/// A drawing target of fixed pixel dimensions
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn draw(&mut self, command: DrawCommand);
}

/// Surface that records every command since the last clear
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            clears: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the surface has been cleared (one per full draw)
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn draw(&mut self, command: DrawCommand) {
        if command == DrawCommand::Clear {
            self.commands.clear();
            self.clears += 1;
        }
        self.commands.push(command);
    }
}

/// Recording surface whose contents stay readable after it is handed off
///
/// Clones share one recording, so a caller can bind one clone to a chart and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct SharedSurface {
    inner: std::rc::Rc<std::cell::RefCell<RecordingSurface>>,
}

impl SharedSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            inner: std::rc::Rc::new(std::cell::RefCell::new(RecordingSurface::new(width, height))),
        }
    }

    pub fn snapshot(&self) -> RecordingSurface {
        self.inner.borrow().clone()
    }

    pub fn clear_count(&self) -> usize {
        self.inner.borrow().clear_count()
    }
}

impl Surface for SharedSurface {
    fn width(&self) -> f64 {
        self.inner.borrow().width()
    }

    fn height(&self) -> f64 {
        self.inner.borrow().height()
    }

    fn draw(&mut self, command: DrawCommand) {
        self.inner.borrow_mut().draw(command);
    }
}
