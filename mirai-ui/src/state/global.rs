//! Global Application State
//!
//! The dashboard core sits behind an `Rc<RefCell<_>>`. Components read it
//! through [`GlobalState::with`], which subscribes them to the revision
//! signal; every mutation that changes what is on screen bumps it.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlCanvasElement;

use mirai::chart::{ChartId, RandomSource};
use mirai::clock::SystemClock;
use mirai::{Config, Dashboard, DashboardEvent, Input};

use super::canvas::CanvasSurface;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    dashboard: Rc<RefCell<Dashboard>>,
    /// Bumped whenever the dashboard changed
    pub revision: RwSignal<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let config = Config::default();
    let source = match config.dashboard.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::new(),
    };
    let dashboard = Dashboard::new(config, Box::new(SystemClock), Box::new(source));

    let state = GlobalState {
        dashboard: Rc::new(RefCell::new(dashboard)),
        revision: create_rw_signal(0),
    };

    provide_context(state);
}

impl GlobalState {
    /// Read the dashboard, re-running the caller on the next change
    pub fn with<R>(&self, f: impl FnOnce(&Dashboard) -> R) -> R {
        self.revision.track();
        f(&self.dashboard.borrow())
    }

    /// Forward a DOM interaction; returns whether to prevent the default
    pub fn dispatch(&self, input: Input) -> bool {
        let consumed = self.dashboard.borrow_mut().handle(input);
        self.flush(false);
        consumed
    }

    pub fn start(&self) {
        self.dashboard.borrow_mut().start();
        self.flush(true);
    }

    /// Advance timers and animations; called from the frame interval
    pub fn tick(&self) {
        let changed = {
            let mut dashboard = self.dashboard.borrow_mut();
            dashboard.tick() > 0 || dashboard.is_animating()
        };
        self.flush(changed);
    }

    /// Attach a mounted canvas to its chart
    pub fn bind_canvas(&self, chart: ChartId, canvas: &HtmlCanvasElement) {
        match CanvasSurface::new(canvas) {
            Some(surface) => {
                self.dashboard
                    .borrow_mut()
                    .bind_surface(chart, Box::new(surface));
                self.flush(false);
            }
            None => web_sys::console::warn_1(
                &format!("No 2d context for {}", chart.element_id()).into(),
            ),
        }
    }

    pub fn unbind_canvas(&self, chart: ChartId) {
        self.dashboard.borrow_mut().unbind_surface(chart);
    }

    /// Drain events and bump the revision if anything changed
    ///
    /// The core borrow is released before the bump so subscribers can read.
    fn flush(&self, changed: bool) {
        let events = self.dashboard.borrow_mut().drain_events();
        for event in &events {
            log_event(event);
        }
        if changed || !events.is_empty() {
            self.revision.update(|r| *r += 1);
        }
    }
}

fn log_event(event: &DashboardEvent) {
    if matches!(event, DashboardEvent::CounterUpdated { .. }) {
        return;
    }
    if let Ok(json) = serde_json::to_string(event) {
        web_sys::console::debug_1(&json.into());
    }
}
