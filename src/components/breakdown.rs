use charming::{
    Chart as CharmingChart,
    component::Legend,
    element::{Color, Label, Tooltip, Trigger},
    series::Pie,
};
use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::chart::use_chart;
use crate::components::no_data::NoData;
use crate::models::usage::UsagePayload;
use crate::models::views::BreakdownView;

const CHART_ID: &str = "breakdown-chart";

#[derive(Properties, PartialEq)]
pub struct BreakdownProps {
    pub data: Rc<UsagePayload>,
}

/// Day (off-peak) versus night (peak) share of energy used
#[function_component(Breakdown)]
pub fn breakdown(props: &BreakdownProps) -> Html {
    let view = use_memo(props.data.clone(), |data| {
        BreakdownView::build(&data.usage, &Local)
    });

    let container_ref = use_chart(CHART_ID, view.clone(), build_chart);

    let Some(view) = view.as_ref() else {
        return html! { <NoData title="สัดส่วนการใช้ไฟ" /> };
    };

    html! {
        <div class="view-card breakdown">
            <h3>{"สัดส่วนการใช้ไฟ"}</h3>
            <div class="chart-container donut" ref={container_ref}>
                <div id={CHART_ID} />
            </div>
            <ul class="breakdown-legend">
                <li id="legend-day" class="legend-day">{&view.day_legend}</li>
                <li id="legend-night" class="legend-night">{&view.night_legend}</li>
            </ul>
        </div>
    }
}

fn build_chart(view: &Option<BreakdownView>) -> Option<CharmingChart> {
    let view = view.as_ref()?;

    Some(
        CharmingChart::new()
            .tooltip(Tooltip::new().trigger(Trigger::Item))
            .legend(Legend::new().show(false))
            .color(vec![
                Color::from(BreakdownView::DAY_COLOR),
                Color::from(BreakdownView::NIGHT_COLOR),
            ])
            .series(
                Pie::new()
                    .radius(vec!["70%", "95%"])
                    .label(Label::new().show(false))
                    .data(view.slices()),
            ),
    )
}
