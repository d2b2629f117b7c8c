//! Statistics Page
//!
//! The four full-size charts.

use leptos::*;

use mirai::chart::ChartId;

use crate::components::{ChartCanvas, SectionView};

#[component]
pub fn StatisticsPage() -> impl IntoView {
    view! {
        <SectionView id="statistics">
            <h1 class="section-title">"Statistics"</h1>

            <div class="stats-charts">
                <ChartCanvas chart=ChartId::AiActivity />
                <ChartCanvas chart=ChartId::Tasks />
                <ChartCanvas chart=ChartId::Trading class="wide" />
                <ChartCanvas chart=ChartId::System class="wide" />
            </div>
        </SectionView>
    }
}
