/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Monthly budget ceiling drawn as the reference line (baht)
    pub const BUDGET_LIMIT_BAHT: f64 = 1500.0;

    /// Progress bar turns red above this share of the budget (percent)
    pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;

    /// Number of records shown in the compact usage chart
    pub const USAGE_WINDOW_SIZE: usize = 10;

    /// Duration of the count-up animation on the amount display (ms)
    pub const COUNT_UP_DURATION_MS: f64 = 1000.0;

    /// Simulated "now" never falls in the first 10% of the log
    pub const MIN_INDEX_FRACTION: f64 = 0.1;

    /// Day (off-peak) bucket is [DAY_START_HOUR, DAY_END_HOUR) local time
    pub const DAY_START_HOUR: u32 = 9;
    pub const DAY_END_HOUR: u32 = 22;

    /// Debounce delay for re-rendering charts on window resize (ms)
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
