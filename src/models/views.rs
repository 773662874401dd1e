//! Display-ready values for each dashboard view.
//!
//! Everything here is pure so the numbers shown on screen can be checked without
//! a browser. Builders return `None` for an empty log, which the components render
//! as an explicit "no data" card.

use super::usage::{DayNightSplit, UsageLog, UsageRecord};
use crate::config::Config;
use crate::utils::sampling::{RandomSource, simulated_current_index, windowed_slice};
use chrono::{Datelike, TimeZone, Timelike};

/// Shown in place of the amount when the fetch fails
pub const ERROR_INDICATOR: &str = "Error";

const WARNING_COLOR: &str = "#FF5252";
const NORMAL_COLOR: &str = "#333333";

const THAI_SHORT_MONTHS: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

/// Buddhist era runs 543 years ahead of the Gregorian calendar
const BUDDHIST_ERA_OFFSET: i32 = 543;

// FORMATTING

/// Integer with comma thousands separators, e.g. `1,234`
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Amount display text: floored to whole baht and grouped
pub fn amount_text(value: f64) -> String {
    format_grouped(value.floor() as i64)
}

/// Short Thai date and time, e.g. `5 ธ.ค. 68 14:00`. Empty without a time.
pub fn thai_short_datetime<Tz: TimeZone>(record: &UsageRecord, tz: &Tz) -> String {
    let Some(local) = record.time_in(tz) else {
        return String::new();
    };
    let year = (local.year() + BUDDHIST_ERA_OFFSET).rem_euclid(100);

    format!(
        "{} {} {:02} {:02}:{:02}",
        local.day(),
        THAI_SHORT_MONTHS[local.month0() as usize],
        year,
        local.hour(),
        local.minute()
    )
}

/// Clock label for the compact chart, e.g. `9:05`
pub fn clock_label<Tz: TimeZone>(record: &UsageRecord, tz: &Tz) -> String {
    record
        .time_in(tz)
        .map(|local| format!("{}:{:02}", local.hour(), local.minute()))
        .unwrap_or_default()
}

/// Day/month/hour label for the budget chart, e.g. `5/12 14:00`
pub fn day_hour_label<Tz: TimeZone>(record: &UsageRecord, tz: &Tz) -> String {
    record
        .time_in(tz)
        .map(|local| format!("{}/{} {}:00", local.day(), local.month(), local.hour()))
        .unwrap_or_default()
}

// GAUGE

/// Running-total gauge on the main dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub current_index: usize,
    pub amount: f64,
    pub budget: f64,
    pub percent: f64,
    pub progress_text: String,
    pub last_update: String,
}

impl GaugeView {
    /// Simulates opening the dashboard at a random point in the month
    pub fn build<Tz: TimeZone>(
        log: &UsageLog,
        budget: f64,
        rng: &mut impl RandomSource,
        tz: &Tz,
    ) -> Option<Self> {
        let current_index = simulated_current_index(log.len(), rng)?;
        let amount = log.running_total(current_index)?;
        let current = log.get(current_index)?;

        let percent = if budget > 0.0 {
            amount / budget * 100.0
        } else {
            0.0
        };

        Some(Self {
            current_index,
            amount,
            budget,
            percent,
            progress_text: format!("{} ฿ จาก {} ฿", amount.floor(), budget),
            last_update: format!("อัปเดตล่าสุด: {}", thai_short_datetime(current, tz)),
        })
    }

    /// Progress bar width in percent, capped at a full bar
    pub fn fill_width(&self) -> f64 {
        self.percent.min(100.0)
    }

    pub fn fill_color(&self) -> &'static str {
        if self.percent > Config::WARNING_THRESHOLD_PERCENT {
            WARNING_COLOR
        } else {
            NORMAL_COLOR
        }
    }

    pub fn fill_style(&self) -> String {
        format!(
            "width: {}%; background-color: {};",
            self.fill_width(),
            self.fill_color()
        )
    }
}

// USAGE CHART

/// Details of the last reading in the sampled window
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub room: String,
    pub power: String,
    pub cost: String,
}

impl Insight {
    fn from_record(record: &UsageRecord) -> Self {
        Self {
            room: record.room_number.clone(),
            power: format!("{} W", record.power_watts),
            cost: format!("{:.2} ฿", record.cost_baht),
        }
    }
}

/// Compact line chart over a random stretch of the log
#[derive(Debug, Clone, PartialEq)]
pub struct UsageChartView {
    pub start: usize,
    pub rows: (usize, usize),
    pub labels: Vec<String>,
    pub kwh: Vec<f64>,
    pub insight: Insight,
}

impl UsageChartView {
    pub fn build<Tz: TimeZone>(
        log: &UsageLog,
        window_size: usize,
        rng: &mut impl RandomSource,
        tz: &Tz,
    ) -> Option<Self> {
        let window = windowed_slice(log.records(), window_size, rng);
        let last = window.last()?;

        Some(Self {
            start: window.start,
            rows: window.row_range(),
            labels: window.records.iter().map(|r| clock_label(r, tz)).collect(),
            kwh: window.records.iter().map(|r| r.kwh_usage).collect(),
            insight: Insight::from_record(last),
        })
    }
}

// BUDGET CHART

/// Whole-month cumulative cost against the budget line
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetChartView {
    pub labels: Vec<String>,
    pub cumulative: Vec<f64>,
    pub budget_line: Vec<f64>,
    pub budget_label: String,
    /// Labels skipped between shown x-axis labels
    pub label_interval: usize,
}

impl BudgetChartView {
    pub const COST_LABEL: &'static str = "ค่าไฟสะสมจริง";

    /// Upper bound on x-axis labels shown at once
    pub const MAX_X_LABELS: usize = 6;

    /// Axis tooltip: the hovered label, then each series in whole baht.
    /// Values are floored before charting so `{c}` already matches `summary_line`.
    pub const TOOLTIP_TEMPLATE: &'static str = "{b0}<br/>{a0}: {c0} บาท<br/>{a1}: {c1} บาท";

    /// Interval that keeps `label_count` labels down to at most `MAX_X_LABELS`
    pub fn label_interval_for(label_count: usize) -> usize {
        label_count.div_ceil(Self::MAX_X_LABELS).saturating_sub(1)
    }

    pub fn build<Tz: TimeZone>(log: &UsageLog, budget: f64, tz: &Tz) -> Option<Self> {
        if log.is_empty() {
            return None;
        }

        Some(Self {
            labels: log.records().iter().map(|r| day_hour_label(r, tz)).collect(),
            cumulative: log.cumulative_series(),
            budget_line: log.budget_series(budget),
            budget_label: format!("งบประมาณ ({} บ.)", budget),
            label_interval: Self::label_interval_for(log.len()),
        })
    }

    /// Series values as charted: floored to whole baht
    pub fn floored(values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| v.floor()).collect()
    }

    /// Summary text for one series value, floored to whole baht
    pub fn summary_line(series: &str, value: f64) -> String {
        format!("{}: {} บาท", series, value.floor())
    }
}

// BREAKDOWN

/// Day versus night donut
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownView {
    pub split: DayNightSplit,
    pub day_legend: String,
    pub night_legend: String,
}

impl BreakdownView {
    pub const DAY_LABEL: &'static str = "กลางวัน";
    pub const NIGHT_LABEL: &'static str = "กลางคืน";
    pub const DAY_COLOR: &'static str = "#E0E0E0";
    pub const NIGHT_COLOR: &'static str = "#333333";

    pub fn build<Tz: TimeZone>(log: &UsageLog, tz: &Tz) -> Option<Self> {
        let split = log.day_night_split_in(tz)?;

        Some(Self {
            split,
            day_legend: format!("{} {}% (Off-Peak)", Self::DAY_LABEL, split.day_percent),
            night_legend: format!("{} {}% (Peak)", Self::NIGHT_LABEL, split.night_percent),
        })
    }

    pub fn slices(&self) -> Vec<(f64, &'static str)> {
        vec![
            (self.split.day_kwh, Self::DAY_LABEL),
            (self.split.night_kwh, Self::NIGHT_LABEL),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record_at(month: u32, day: u32, hour: u32, minute: u32) -> UsageRecord {
        UsageRecord {
            timestamp: Some(Utc.with_ymd_and_hms(2025, month, day, hour, minute, 0).unwrap()),
            kwh_usage: 0.5,
            cost_baht: 3.456,
            power_watts: 850.0,
            room_number: "A-101".to_string(),
        }
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
        assert_eq!(format_grouped(-1500), "-1,500");
    }

    #[test]
    fn test_amount_text_floors() {
        assert_eq!(amount_text(1234.99), "1,234");
    }

    #[test]
    fn test_thai_short_datetime() {
        let rec = record_at(12, 5, 14, 0);
        assert_eq!(thai_short_datetime(&rec, &Utc), "5 ธ.ค. 68 14:00");
    }

    #[test]
    fn test_labels() {
        let rec = record_at(12, 5, 9, 5);
        assert_eq!(clock_label(&rec, &Utc), "9:05");
        assert_eq!(day_hour_label(&rec, &Utc), "5/12 9:00");
    }

    #[test]
    fn test_labels_without_time_are_empty() {
        let mut rec = record_at(12, 5, 9, 5);
        rec.timestamp = None;
        assert_eq!(clock_label(&rec, &Utc), "");
        assert_eq!(day_hour_label(&rec, &Utc), "");
        assert_eq!(thai_short_datetime(&rec, &Utc), "");
    }

    #[test]
    fn test_budget_label_interval() {
        assert_eq!(BudgetChartView::label_interval_for(0), 0);
        assert_eq!(BudgetChartView::label_interval_for(6), 0);
        assert_eq!(BudgetChartView::label_interval_for(7), 1);
        assert_eq!(BudgetChartView::label_interval_for(12), 1);
        // a month of hourly readings
        let interval = BudgetChartView::label_interval_for(720);
        assert_eq!(interval, 119);
        assert!(720usize.div_ceil(interval + 1) <= BudgetChartView::MAX_X_LABELS);
    }

    #[test]
    fn test_floored_series_matches_summary() {
        let floored = BudgetChartView::floored(&[12.7, 1499.99]);
        assert_eq!(floored, vec![12.0, 1499.0]);
        assert_eq!(
            BudgetChartView::summary_line("a", 1499.99),
            format!("a: {} บาท", floored[1])
        );
        assert!(BudgetChartView::TOOLTIP_TEMPLATE.contains("{c0} บาท"));
    }

    #[test]
    fn test_insight_formatting() {
        let insight = Insight::from_record(&record_at(12, 5, 9, 0));
        assert_eq!(insight.room, "A-101");
        assert_eq!(insight.power, "850 W");
        assert_eq!(insight.cost, "3.46 ฿");
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            BudgetChartView::summary_line("ค่าไฟสะสมจริง", 1499.9),
            "ค่าไฟสะสมจริง: 1499 บาท"
        );
    }
}
