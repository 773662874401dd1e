use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AreaStyle, AxisLabel, AxisType, LineStyle, LineStyleType, SplitLine, Tooltip, Trigger,
    },
    series::Line,
};
use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::chart::use_chart;
use crate::components::no_data::NoData;
use crate::config::Config;
use crate::hooks::use_profile::use_profile;
use crate::models::usage::UsagePayload;
use crate::models::views::BudgetChartView;

const CHART_ID: &str = "budget-chart";

#[derive(Properties, PartialEq)]
pub struct BudgetChartProps {
    pub data: Rc<UsagePayload>,
}

/// Cumulative cost for the whole log against the monthly budget
#[function_component(BudgetChart)]
pub fn budget_chart(props: &BudgetChartProps) -> Html {
    let profile = use_profile();
    let view = use_memo(props.data.clone(), |data| {
        BudgetChartView::build(&data.usage, Config::BUDGET_LIMIT_BAHT, &Local)
    });

    let container_ref = use_chart(CHART_ID, view.clone(), build_chart);

    let Some(view) = view.as_ref() else {
        return html! { <NoData title="ค่าไฟสะสมเทียบงบประมาณ" /> };
    };

    let spent = view.cumulative.last().copied().unwrap_or_default();
    let profile_json = profile
        .filter(|p| !p.is_empty())
        .map(|p| AttrValue::from(p.to_json()));

    html! {
        <div class="view-card budget" data-profile={profile_json}>
            <h3>{"ค่าไฟสะสมเทียบงบประมาณ"}</h3>
            <div class="chart-container" ref={container_ref}>
                <div id={CHART_ID} />
            </div>
            <p class="budget-summary">
                {BudgetChartView::summary_line(BudgetChartView::COST_LABEL, spent)}
            </p>
        </div>
    }
}

fn build_chart(view: &Option<BudgetChartView>) -> Option<CharmingChart> {
    let view = view.as_ref()?;

    Some(
        CharmingChart::new()
            .tooltip(
                Tooltip::new()
                    .trigger(Trigger::Axis)
                    .formatter(BudgetChartView::TOOLTIP_TEMPLATE),
            )
            .legend(Legend::new().show(true))
            .grid(
                Grid::new()
                    .left("4%")
                    .right("4%")
                    .top("14%")
                    .bottom("4%")
                    .contain_label(true),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .boundary_gap(false)
                    .data(view.labels.clone())
                    .axis_label(
                        AxisLabel::new()
                            .rotate(0)
                            .interval(view.label_interval as f64),
                    )
                    .split_line(SplitLine::new().show(false)),
            )
            .y_axis(
                Axis::new().type_(AxisType::Value).split_line(
                    SplitLine::new().line_style(LineStyle::new().color("#f5f5f5")),
                ),
            )
            .series(
                Line::new()
                    .name(BudgetChartView::COST_LABEL)
                    .data(BudgetChartView::floored(&view.cumulative))
                    .smooth(0.4)
                    .show_symbol(false)
                    .line_style(LineStyle::new().color("#FF5252").width(2.0))
                    .area_style(AreaStyle::new().color("rgba(255, 82, 82, 0.25)")),
            )
            .series(
                Line::new()
                    .name(view.budget_label.as_str())
                    .data(BudgetChartView::floored(&view.budget_line))
                    .show_symbol(false)
                    .line_style(
                        LineStyle::new()
                            .color("#333333")
                            .width(1.5)
                            .type_(LineStyleType::Dashed),
                    ),
            ),
    )
}
