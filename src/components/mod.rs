pub mod breakdown;
pub mod budget_chart;
pub mod chart;
pub mod gauge;
pub mod no_data;
pub mod plan_selector;
pub mod status;
pub mod usage_chart;

pub use breakdown::Breakdown;
pub use budget_chart::BudgetChart;
pub use gauge::Gauge;
pub use plan_selector::PlanSelector;
pub use status::Status;
pub use usage_chart::UsageChart;
