use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::plan::{Plan, PlanStep};

/// Start card, then the plan list, then the chosen plan's details
#[function_component(PlanSelector)]
pub fn plan_selector() -> Html {
    let step = use_state(PlanStep::default);

    let show_list = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(step.show_list()))
    };

    let on_select = {
        let step = step.clone();
        Callback::from(move |e: MouseEvent| {
            let target: HtmlElement = e.target_unchecked_into();
            // Buttons carry their plan id; clicks on child text bubble up here too
            if let Some(id) = target
                .closest("[data-plan]")
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("data-plan"))
            {
                step.set(step.select(&id));
            }
        })
    };

    html! {
        <div class="view-card plan-flow">
            if step.shows_start() {
                <div id="step-start" class="plan-step">
                    <h3>{"อยากประหยัดค่าไฟ?"}</h3>
                    <button class="plan-start" onclick={show_list}>{"ดูแผนประหยัดไฟ"}</button>
                </div>
            }
            if step.shows_list() {
                <div id="step-selection" class="plan-step fade-in">
                    {
                        Plan::all().iter().map(|plan| {
                            let selected = step.selected() == Some(*plan);
                            let class = classes!("plan-option", selected.then_some("selected"));
                            html! {
                                <button
                                    {class}
                                    data-plan={plan.id()}
                                    onclick={on_select.clone()}
                                >
                                    {plan.title()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            }
            if let Some(plan) = step.selected() {
                <div id="step-result" class="plan-step plan-result fade-in">
                    <h3 id="result-title">{plan.title()}</h3>
                    <p id="result-desc">{plan.description()}</p>
                    <p class="result-amount-label">{"ประหยัดได้ประมาณ"}</p>
                    <p id="result-amount" class="result-amount">{plan.estimated_savings()}</p>
                </div>
            }
        </div>
    }
}
