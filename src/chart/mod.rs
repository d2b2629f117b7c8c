//! Chart Renderer
//!
//! Six charts, each bound to one named surface:
//!
//! - **line**: agent activity over 24 hours
//! - **area**: memory growth over 7 days
//! - **bars**: token usage by category
//! - **pie**: task status split
//! - **candles**: synthetic trading slots
//! - **overlay**: CPU / RAM / Disk on one scale with a legend
//!
//! Series are drawn fresh from a [`SeriesSource`] on every draw. Drawing a
//! chart whose surface is not bound is a no-op.

pub mod bars;
pub mod line;
pub mod palette;
pub mod pie;
pub mod source;
pub mod surface;

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::MiraiResult;
use crate::session::Theme;

pub use bars::Candle;
pub use line::NamedSeries;
pub use pie::{PieEntry, Sector};
pub use source::{FixedSource, RandomSource, SeriesRequest, SeriesSource};
pub use surface::{
    Color, DrawCommand, Gradient, Point, RecordingSurface, SharedSurface, Surface, TextAlign,
};

/// Every chart on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    AgentActivity,
    MemoryGrowth,
    AiActivity,
    Tasks,
    Trading,
    System,
}

impl ChartId {
    pub const ALL: [ChartId; 6] = [
        ChartId::AgentActivity,
        ChartId::MemoryGrowth,
        ChartId::AiActivity,
        ChartId::Tasks,
        ChartId::Trading,
        ChartId::System,
    ];

    /// Mini charts on the dashboard section, refreshed by the stats ticker
    pub const DASHBOARD: [ChartId; 2] = [ChartId::AgentActivity, ChartId::MemoryGrowth];

    /// DOM id of the canvas this chart draws on
    pub fn element_id(self) -> &'static str {
        match self {
            ChartId::AgentActivity => "agentChart",
            ChartId::MemoryGrowth => "memoryChart",
            ChartId::AiActivity => "aiActivityChart",
            ChartId::Tasks => "tasksChart",
            ChartId::Trading => "tradingChart",
            ChartId::System => "systemChart",
        }
    }

    /// Canvas size in pixels (width, height)
    pub fn default_size(self) -> (f64, f64) {
        match self {
            ChartId::AgentActivity | ChartId::MemoryGrowth => (300.0, 80.0),
            ChartId::AiActivity => (500.0, 250.0),
            ChartId::Tasks => (300.0, 300.0),
            ChartId::Trading | ChartId::System => (600.0, 300.0),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartId::AgentActivity => "Agent Activity (24h)",
            ChartId::MemoryGrowth => "Memory Growth (7d)",
            ChartId::AiActivity => "Token Usage by Type",
            ChartId::Tasks => "Task Status",
            ChartId::Trading => "Trading",
            ChartId::System => "System Load",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

impl FromStr for ChartId {
    type Err = String;

    /// Accepts the element id ("agentChart") or the snake_case name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::ALL
            .into_iter()
            .find(|id| {
                id.element_id().eq_ignore_ascii_case(s)
                    || serde_json::to_value(id)
                        .ok()
                        .and_then(|v| v.as_str().map(|name| name == s))
                        .unwrap_or(false)
            })
            .ok_or_else(|| format!("unknown chart: {}", s))
    }
}

const AGENT_ACTIVITY: SeriesRequest = SeriesRequest::uniform(24, 20.0, 40.0);
const MEMORY_GROWTH: SeriesRequest = SeriesRequest::trend(7, 150.0, 15.0, 10.0);
const CANDLE_OPEN: SeriesRequest = SeriesRequest::uniform(20, 100.0, 50.0);
const CANDLE_CLOSE: SeriesRequest = SeriesRequest::uniform(20, 100.0, 50.0);
const CANDLE_HIGH: SeriesRequest = SeriesRequest::uniform(20, 120.0, 40.0);
const CANDLE_LOW: SeriesRequest = SeriesRequest::uniform(20, 80.0, 30.0);

const TOKEN_CATEGORIES: [(&str, f64); 5] = [
    ("Chat", 3500.0),
    ("Analysis", 2800.0),
    ("Code", 2100.0),
    ("Trading", 1600.0),
    ("Other", 1200.0),
];

fn task_status() -> [PieEntry; 3] {
    [
        PieEntry::new("Completed", 85.0, palette::GREEN),
        PieEntry::new("Active", 12.0, palette::BLUE),
        PieEntry::new("Pending", 3.0, palette::ORANGE),
    ]
}

fn system_metrics() -> [(&'static str, SeriesRequest, Color); 3] {
    [
        ("CPU", SeriesRequest::uniform(30, 20.0, 40.0), palette::VIOLET),
        ("RAM", SeriesRequest::uniform(30, 40.0, 30.0), palette::PURPLE),
        ("Disk", SeriesRequest::uniform(30, 30.0, 20.0), palette::BLUE),
    ]
}

/// Binds charts to surfaces and draws them
#[derive(Default)]
pub struct ChartRenderer {
    surfaces: HashMap<ChartId, Box<dyn Surface>>,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the surface for `chart`
    pub fn bind(&mut self, chart: ChartId, surface: Box<dyn Surface>) {
        self.surfaces.insert(chart, surface);
    }

    /// Detach the surface for `chart`, e.g. when its canvas unmounts
    pub fn unbind(&mut self, chart: ChartId) -> Option<Box<dyn Surface>> {
        self.surfaces.remove(&chart)
    }

    pub fn is_bound(&self, chart: ChartId) -> bool {
        self.surfaces.contains_key(&chart)
    }

    /// Draw one chart; returns false when no surface is bound
    pub fn draw(&mut self, chart: ChartId, theme: Theme, source: &mut dyn SeriesSource) -> bool {
        let Some(surface) = self.surfaces.get_mut(&chart) else {
            return false;
        };
        let surface = surface.as_mut();
        let text = palette::text_color(theme);

        match chart {
            ChartId::AgentActivity => {
                let data = source.next_series(&AGENT_ACTIVITY);
                line::line_series(surface, &data, 60.0, palette::accent_color(theme));
            }
            ChartId::MemoryGrowth => {
                let data = source.next_series(&MEMORY_GROWTH);
                line::area_series(surface, &data, 300.0, palette::TEAL);
            }
            ChartId::AiActivity => {
                bars::category_bars(surface, &TOKEN_CATEGORIES, &palette::CATEGORY_PALETTE, text);
            }
            ChartId::Tasks => {
                pie::pie(surface, &task_status(), text);
            }
            ChartId::Trading => {
                let open = source.next_series(&CANDLE_OPEN);
                let close = source.next_series(&CANDLE_CLOSE);
                let high = source.next_series(&CANDLE_HIGH);
                let low = source.next_series(&CANDLE_LOW);
                let data: Vec<Candle> = open
                    .iter()
                    .zip(&close)
                    .zip(&high)
                    .zip(&low)
                    .map(|(((&open, &close), &high), &low)| Candle {
                        open,
                        close,
                        high,
                        low,
                    })
                    .collect();
                bars::candles(surface, &data, palette::UP, palette::DOWN);
            }
            ChartId::System => {
                let series: Vec<NamedSeries> = system_metrics()
                    .iter()
                    .map(|(name, request, color)| NamedSeries {
                        name: name.to_string(),
                        values: source.next_series(request),
                        color: *color,
                    })
                    .collect();
                line::overlay(surface, &series, text);
            }
        }

        tracing::trace!(chart = %chart, %theme, "Chart drawn");
        true
    }

    /// Draw every chart in `charts`; returns the ones that had a surface
    pub fn draw_many(
        &mut self,
        charts: &[ChartId],
        theme: Theme,
        source: &mut dyn SeriesSource,
    ) -> Vec<ChartId> {
        charts
            .iter()
            .copied()
            .filter(|chart| self.draw(*chart, theme, &mut *source))
            .collect()
    }
}

/// Draw `chart` once on an offscreen surface and return its commands as JSON
pub fn render_to_json(
    chart: ChartId,
    width: f64,
    height: f64,
    theme: Theme,
    source: &mut dyn SeriesSource,
) -> MiraiResult<String> {
    let surface = SharedSurface::new(width, height);
    let mut renderer = ChartRenderer::new();
    renderer.bind(chart, Box::new(surface.clone()));
    renderer.draw(chart, theme, source);

    let json = serde_json::to_string_pretty(surface.snapshot().commands())?;
    Ok(json)
}

impl fmt::Debug for ChartRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound: Vec<_> = self.surfaces.keys().collect();
        bound.sort();
        f.debug_struct("ChartRenderer").field("bound", &bound).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_chart_is_noop() {
        let mut renderer = ChartRenderer::new();
        let mut source = FixedSource::constant(1.0);
        assert!(!renderer.draw(ChartId::Tasks, Theme::Dark, &mut source));
    }

    #[test]
    fn test_draw_many_reports_bound_only() {
        let mut renderer = ChartRenderer::new();
        renderer.bind(ChartId::Tasks, Box::new(RecordingSurface::new(300.0, 300.0)));
        renderer.bind(ChartId::System, Box::new(RecordingSurface::new(600.0, 300.0)));

        let drawn = renderer.draw_many(&ChartId::ALL, Theme::Dark, &mut RandomSource::seeded(1));
        assert_eq!(drawn, vec![ChartId::Tasks, ChartId::System]);
    }

    #[test]
    fn test_theme_switches_text_color() {
        let shared = SharedSurface::new(500.0, 250.0);
        let mut renderer = ChartRenderer::new();
        renderer.bind(ChartId::AiActivity, Box::new(shared.clone()));
        let mut source = FixedSource::constant(0.0);

        let label_color = |surface: &RecordingSurface| {
            surface.commands().iter().find_map(|c| match c {
                DrawCommand::Text { color, .. } => Some(*color),
                _ => None,
            })
        };

        renderer.draw(ChartId::AiActivity, Theme::Dark, &mut source);
        assert_eq!(label_color(&shared.snapshot()), Some(palette::TEXT_DARK));

        renderer.draw(ChartId::AiActivity, Theme::Light, &mut source);
        assert_eq!(label_color(&shared.snapshot()), Some(palette::TEXT_LIGHT));
        assert_eq!(shared.snapshot().texts(), vec!["Chat", "Analysis", "Code", "Trading", "Other"]);
    }

    #[test]
    fn test_agent_line_uses_fixed_series() {
        let shared = SharedSurface::new(230.0, 60.0);
        let mut renderer = ChartRenderer::new();
        renderer.bind(ChartId::AgentActivity, Box::new(shared.clone()));
        let mut source = FixedSource::constant(30.0);

        renderer.draw(ChartId::AgentActivity, Theme::Light, &mut source);
        let snapshot = shared.snapshot();
        match &snapshot.commands()[1] {
            DrawCommand::Polyline { points, color, .. } => {
                assert_eq!(points.len(), 24);
                assert!(points.iter().all(|p| p.y == 30.0));
                assert_eq!(points[23].x, 230.0);
                assert_eq!(*color, palette::ACCENT_LIGHT);
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_candles_built_from_four_series() {
        let shared = SharedSurface::new(400.0, 200.0);
        let mut renderer = ChartRenderer::new();
        renderer.bind(ChartId::Trading, Box::new(shared.clone()));
        let mut source = FixedSource::default()
            .push(vec![100.0; 20])
            .push(vec![110.0; 20])
            .push(vec![130.0; 20])
            .push(vec![90.0; 20]);

        renderer.draw(ChartId::Trading, Theme::Dark, &mut source);
        let snapshot = shared.snapshot();
        assert_eq!(snapshot.commands().len(), 1 + 20 * 2);
        assert!(snapshot.commands().iter().skip(1).all(|c| match c {
            DrawCommand::Polyline { color, .. } | DrawCommand::Rect { color, .. } => *color == palette::UP,
            _ => false,
        }));
    }

    #[test]
    fn test_render_to_json_tags_ops() {
        let json = render_to_json(ChartId::Tasks, 300.0, 300.0, Theme::Dark, &mut FixedSource::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let ops: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["op"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ops[0], "clear");
        assert_eq!(ops.iter().filter(|op| *op == "sector").count(), 3);
    }

    #[test]
    fn test_chart_id_parsing() {
        assert_eq!("tasksChart".parse::<ChartId>(), Ok(ChartId::Tasks));
        assert_eq!("memory_growth".parse::<ChartId>(), Ok(ChartId::MemoryGrowth));
        assert!("pieChart".parse::<ChartId>().is_err());
    }
}
