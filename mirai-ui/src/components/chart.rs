//! Chart Component
//!
//! Canvas bound to one dashboard chart. The core does the drawing; this
//! component only hands it the canvas once mounted.

use leptos::*;

use mirai::chart::ChartId;

use crate::state::global::GlobalState;

/// Canvas for `chart` at its native pixel size
#[component]
pub fn ChartCanvas(
    chart: ChartId,
    /// Extra CSS classes
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (width, height) = chart.default_size();

    let state_for_bind = state.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            state_for_bind.bind_canvas(chart, &canvas);
        }
    });
    on_cleanup(move || state.unbind_canvas(chart));

    view! {
        <div class="chart-container">
            <h3 class="chart-title">{chart.title()}</h3>
            <canvas
                node_ref=canvas_ref
                id=chart.element_id()
                width=width.to_string()
                height=height.to_string()
                class=format!("chart-canvas {}", class)
            />
        </div>
    }
}
