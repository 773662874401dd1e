use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{AxisType, ItemStyle, LineStyle, SplitLine, Symbol, Tooltip, Trigger},
    series::Line,
};
use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::chart::use_chart;
use crate::components::no_data::NoData;
use crate::config::Config;
use crate::models::usage::UsagePayload;
use crate::models::views::UsageChartView;
use crate::utils::sampling::{SeededRandom, salt};

const CHART_ID: &str = "usage-chart";

#[derive(Properties, PartialEq)]
pub struct UsageChartProps {
    pub data: Rc<UsagePayload>,
}

/// Recent usage over a random stretch of the log, plus the latest reading
#[function_component(UsageChart)]
pub fn usage_chart(props: &UsageChartProps) -> Html {
    let view = use_memo(props.data.clone(), |data| {
        let view = UsageChartView::build(
            &data.usage,
            Config::USAGE_WINDOW_SIZE,
            &mut SeededRandom::from_clock(salt::USAGE_CHART),
            &Local,
        );
        if let Some(v) = &view {
            let (first, last) = v.rows;
            gloo::console::log!(&format!("Sampled rows {first} to {last}"));
        }
        view
    });

    let container_ref = use_chart(CHART_ID, view.clone(), build_chart);

    let Some(view) = view.as_ref() else {
        return html! { <NoData title="การใช้ไฟล่าสุด" /> };
    };

    html! {
        <div class="view-card usage">
            <h3>{"การใช้ไฟล่าสุด"}</h3>
            <div class="chart-container compact" ref={container_ref}>
                <div id={CHART_ID} />
            </div>
            <div class="insight-grid">
                <div class="insight-item">
                    <span class="insight-label">{"ห้อง"}</span>
                    <span id="insight-room" class="insight-value">{&view.insight.room}</span>
                </div>
                <div class="insight-item">
                    <span class="insight-label">{"กำลังไฟ"}</span>
                    <span id="insight-power" class="insight-value">{&view.insight.power}</span>
                </div>
                <div class="insight-item">
                    <span class="insight-label">{"ค่าไฟ"}</span>
                    <span id="insight-cost" class="insight-value">{&view.insight.cost}</span>
                </div>
            </div>
        </div>
    }
}

fn build_chart(view: &Option<UsageChartView>) -> Option<CharmingChart> {
    let view = view.as_ref()?;

    Some(
        CharmingChart::new()
            .tooltip(Tooltip::new().trigger(Trigger::Axis))
            .legend(Legend::new().show(false))
            .grid(
                Grid::new()
                    .left("2%")
                    .right("2%")
                    .top("8%")
                    .bottom("4%")
                    .contain_label(true),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .boundary_gap(false)
                    .data(view.labels.clone())
                    .split_line(SplitLine::new().show(false)),
            )
            .y_axis(Axis::new().type_(AxisType::Value).show(false))
            .series(
                Line::new()
                    .name("การใช้ไฟ (kWh)")
                    .data(view.kwh.clone())
                    .smooth(0.4)
                    .symbol(Symbol::Circle)
                    .symbol_size(6.0)
                    .line_style(LineStyle::new().color("#333333").width(2.0))
                    .item_style(ItemStyle::new().color("#ffffff").border_color("#333333")),
            ),
    )
}
