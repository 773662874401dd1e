use std::rc::Rc;
use yew::prelude::*;

use usage_dashboard::components::{
    Breakdown, BudgetChart, Gauge, PlanSelector, Status, UsageChart,
};
use usage_dashboard::hooks::use_profile::ProfileContext;
use usage_dashboard::hooks::use_usage::use_usage;

#[function_component(App)]
fn app() -> Html {
    let state = use_usage();

    // The page owns the payload; views only borrow what they display
    let profile: ProfileContext = use_memo((*state).clone(), |state| {
        state
            .data()
            .map(|payload| payload.profile.clone())
            .unwrap_or_default()
    });

    html! {
        <ContextProvider<ProfileContext> context={profile}>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Energy Usage Dashboard"}</h1>
                </header>

                <main class="app-main">
                    <section class="status-section">
                        <Status state={(*state).clone()} />
                    </section>

                    <section class="dashboard-section">
                        <Gauge state={(*state).clone()} />
                    </section>

                    if let Some(data) = state.data() {
                        <section class="usage-section">
                            <UsageChart data={Rc::clone(data)} />
                        </section>

                        <section class="warning-section">
                            <BudgetChart data={Rc::clone(data)} />
                        </section>

                        <section class="breakdown-section">
                            <Breakdown data={Rc::clone(data)} />
                        </section>
                    }

                    <section class="plan-section">
                        <PlanSelector />
                    </section>
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ContextProvider<ProfileContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
