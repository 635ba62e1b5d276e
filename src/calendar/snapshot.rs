use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
    #[error("Malformed day entry: {0}")]
    MalformedEntry(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    #[serde(default)]
    pub available_count: u32,
    #[serde(default)]
    pub booked_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_holiday: Option<bool>,
    #[serde(default)]
    pub summary: DaySummary,
}

impl DaySnapshot {
    pub fn new(available_count: u32, booked_count: u32) -> Self {
        Self {
            is_holiday: None,
            summary: DaySummary { available_count, booked_count },
        }
    }

    pub fn with_holiday(mut self, is_holiday: bool) -> Self {
        self.is_holiday = Some(is_holiday);
        self
    }

    pub fn flagged_holiday(&self) -> bool {
        self.is_holiday == Some(true)
    }
}

/// Per-day availability for one month, keyed by `YYYY-MM-DD`.
///
/// Owned by the backend. A fetch replaces the whole value; entries are never
/// merged across fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarMonthSnapshot {
    days: HashMap<String, DaySnapshot>,
}

impl CalendarMonthSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, iso_key: impl Into<String>, day: DaySnapshot) -> Self {
        self.days.insert(iso_key.into(), day);
        self
    }

    pub fn get(&self, iso_key: &str) -> Option<&DaySnapshot> {
        self.days.get(iso_key)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<(String, DaySnapshot)> for CalendarMonthSnapshot {
    fn from_iter<T: IntoIterator<Item = (String, DaySnapshot)>>(iter: T) -> Self {
        Self { days: iter.into_iter().collect() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayRecord {
    date: String,
    #[serde(default)]
    is_holiday: Option<bool>,
    #[serde(default)]
    summary: DaySummary,
}

/// Decodes a calendar-month response body into a snapshot.
///
/// Wrappers are resolved in a fixed order:
/// 1. an object carrying `data` is unwrapped, repeatedly;
/// 2. an object carrying `days` is replaced by that member;
/// 3. an `items` member, or a bare array, is read as a list of
///    `{ date, isHoliday?, summary }` records;
/// 4. any remaining object is the `isoKey -> day` map itself.
pub fn decode_snapshot_response(body: Value) -> Result<CalendarMonthSnapshot, SnapshotError> {
    let mut body = body;

    loop {
        match body {
            Value::Object(mut map) => {
                if let Some(inner) = map.remove("data") {
                    body = inner;
                    continue;
                }
                if let Some(days) = map.remove("days") {
                    body = days;
                    continue;
                }
                if let Some(items) = map.remove("items") {
                    return decode_records(items);
                }
                return serde_json::from_value(Value::Object(map)).map_err(SnapshotError::from);
            }
            Value::Array(items) => return decode_records(Value::Array(items)),
            other => {
                return Err(SnapshotError::UnexpectedShape(format!(
                    "expected object or array, got {}",
                    describe(&other)
                )));
            }
        }
    }
}

fn decode_records(items: Value) -> Result<CalendarMonthSnapshot, SnapshotError> {
    let records: Vec<DayRecord> = serde_json::from_value(items)?;
    Ok(records
        .into_iter()
        .map(|record| {
            let day = DaySnapshot {
                is_holiday: record.is_holiday,
                summary: record.summary,
            };
            (record.date, day)
        })
        .collect())
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
