use chrono::Local;
use yew::prelude::*;

use crate::components::no_data::NoData;
use crate::config::Config;
use crate::hooks::use_count_up::use_count_up;
use crate::hooks::use_usage::DataState;
use crate::models::views::{ERROR_INDICATOR, GaugeView, amount_text};
use crate::utils::sampling::{SeededRandom, salt};

/// Text for the amount display given the fetch state and the animated value
pub fn amount_display(state: &DataState, counted: f64) -> String {
    if state.is_loading() {
        "--".to_string()
    } else if state.error().is_some() {
        ERROR_INDICATOR.to_string()
    } else {
        amount_text(counted)
    }
}

#[derive(Properties, PartialEq)]
pub struct GaugeProps {
    pub state: DataState,
}

/// Running total so far this month against the budget
#[function_component(Gauge)]
pub fn gauge(props: &GaugeProps) -> Html {
    let view = use_memo(props.state.clone(), |state| {
        let view = state.data().and_then(|payload| {
            GaugeView::build(
                &payload.usage,
                Config::BUDGET_LIMIT_BAHT,
                &mut SeededRandom::from_clock(salt::GAUGE),
                &Local,
            )
        });
        if let Some(v) = &view {
            gloo::console::log!(&format!("Simulated current record: {}", v.current_index + 1));
        }
        view
    });

    let target = view.as_ref().as_ref().map_or(0.0, |v| v.amount);
    let counted = use_count_up(target, Config::COUNT_UP_DURATION_MS);
    let amount = amount_display(&props.state, counted);

    let loaded_empty = props.state.data().is_some() && view.is_none();
    if loaded_empty {
        return html! { <NoData title="ค่าไฟเดือนนี้" /> };
    }

    html! {
        <div class="view-card gauge">
            <h3>{"ค่าไฟเดือนนี้"}</h3>
            <p id="display-amount" class="amount">{amount}</p>
            if let Some(v) = view.as_ref() {
                <div class="progress-bar">
                    <div id="progress-fill" class="progress-fill" style={v.fill_style()} />
                </div>
                <p id="progress-text" class="progress-text">{&v.progress_text}</p>
                <p id="last-update" class="last-update">{&v.last_update}</p>
            }
        </div>
    }
}
