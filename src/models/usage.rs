use crate::config::Config;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One metered reading from the usage sheet.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UsageRecord {
    /// `None` when the sheet row has a blank or unreadable time
    #[serde(default, deserialize_with = "deserialize_flexible_datetime")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub kwh_usage: f64,

    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub cost_baht: f64,

    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub power_watts: f64,

    #[serde(default, deserialize_with = "deserialize_label")]
    pub room_number: String,
}

impl UsageRecord {
    /// Reading time in the given time zone
    pub fn time_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        self.timestamp.map(|ts| ts.with_timezone(tz))
    }

    /// Hour of day of this reading in the given time zone
    pub fn hour_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<u32> {
        self.time_in(tz).map(|local| local.hour())
    }

    /// True when the reading falls in the day (off-peak) bucket.
    /// Readings without a time count as night.
    pub fn is_day_in<Tz: TimeZone>(&self, tz: &Tz) -> bool {
        self.hour_in(tz)
            .is_some_and(|hour| (Config::DAY_START_HOUR..Config::DAY_END_HOUR).contains(&hour))
    }
}

/// Accepts a JSON number, a numeric string, `null` or nothing at all.
/// Anything that is not a finite number reads as zero.
fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    let number = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    Ok(if number.is_finite() { number } else { 0.0 })
}

/// Room labels come back from the sheet as either text or numbers
fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

/// Custom deserializer for timestamps with or without an offset and seconds.
/// Naive values are taken as UTC; blank, missing or unreadable values become `None`.
fn deserialize_flexible_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::String(s)) => parse_flexible_datetime(&s),
        _ => None,
    })
}

pub(crate) fn parse_flexible_datetime(s: &str) -> Option<DateTime<Utc>> {
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}

/// Day (off-peak) versus night (peak) share of the consumed energy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayNightSplit {
    pub day_kwh: f64,
    pub night_kwh: f64,
    pub day_percent: u32,
    pub night_percent: u32,
}

impl DayNightSplit {
    pub fn from_totals(day_kwh: f64, night_kwh: f64) -> Self {
        let total = day_kwh + night_kwh;

        let (day_percent, night_percent) = if total > 0.0 {
            (
                (day_kwh / total * 100.0).round() as u32,
                (night_kwh / total * 100.0).round() as u32,
            )
        } else {
            (0, 0)
        };

        Self {
            day_kwh,
            night_kwh,
            day_percent,
            night_percent,
        }
    }

    pub fn total_kwh(&self) -> f64 {
        self.day_kwh + self.night_kwh
    }
}

/// Chronological usage log for a single page session.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct UsageLog {
    records: Vec<UsageRecord>,
}

impl UsageLog {
    pub fn new(records: Vec<UsageRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&UsageRecord> {
        self.records.get(index)
    }

    pub fn total_cost(&self) -> f64 {
        self.records.iter().map(|r| r.cost_baht).sum()
    }

    /// Money spent from the first record up to and including `index`.
    /// An index past the end is clamped to the last record.
    pub fn running_total(&self, index: usize) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }

        let end = index.min(self.records.len() - 1);
        Some(self.records[..=end].iter().map(|r| r.cost_baht).sum())
    }

    /// Running cost total at every record
    pub fn cumulative_series(&self) -> Vec<f64> {
        self.records
            .iter()
            .scan(0.0, |acc, r| {
                *acc += r.cost_baht;
                Some(*acc)
            })
            .collect()
    }

    /// Constant budget line with one point per record
    pub fn budget_series(&self, limit: f64) -> Vec<f64> {
        vec![limit; self.records.len()]
    }

    /// Splits total kWh into day and night buckets by the hour in `tz`
    pub fn day_night_split_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DayNightSplit> {
        if self.records.is_empty() {
            return None;
        }

        let (day, night) = self.records.iter().fold((0.0, 0.0), |(day, night), r| {
            if r.is_day_in(tz) {
                (day + r.kwh_usage, night)
            } else {
                (day, night + r.kwh_usage)
            }
        });

        Some(DayNightSplit::from_totals(day, night))
    }

    /// Day/night split in the browser's local time zone
    pub fn day_night_split(&self) -> Option<DayNightSplit> {
        self.day_night_split_in(&Local)
    }
}

/// Opaque profile attached to the payload. Never interpreted here.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Profile(Value);

impl Profile {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Compact JSON text, for handing the profile to later consumers
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }
}

/// Whole document returned by the usage endpoint
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UsagePayload {
    #[serde(default, deserialize_with = "deserialize_usage")]
    pub usage: UsageLog,

    #[serde(default)]
    pub profile: Profile,
}

/// A `null` usage array is treated like an empty one
fn deserialize_usage<'de, D>(deserializer: D) -> Result<UsageLog, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<UsageLog>::deserialize(deserializer)?.unwrap_or_default())
}
