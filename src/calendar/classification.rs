use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::date_utils::iso_key_of;
use crate::calendar::snapshot::CalendarMonthSnapshot;

pub const DEFAULT_HOLIDAY_WEEKDAY: Weekday = Weekday::Fri;
pub const DEFAULT_DAILY_CAPACITY: u32 = 6;

/// The platform-wide weekly day off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayPolicy {
    pub weekday: Weekday,
}

impl HolidayPolicy {
    pub fn new(weekday: Weekday) -> Self {
        Self { weekday }
    }

    pub fn is_weekly_holiday(&self, date: NaiveDate) -> bool {
        date.weekday() == self.weekday
    }
}

impl Default for HolidayPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HOLIDAY_WEEKDAY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationPolicy {
    pub holiday: HolidayPolicy,
    pub daily_capacity: u32,
}

impl ClassificationPolicy {
    pub fn with_holiday(mut self, weekday: Weekday) -> Self {
        self.holiday = HolidayPolicy::new(weekday);
        self
    }

    pub fn with_daily_capacity(mut self, daily_capacity: u32) -> Self {
        self.daily_capacity = daily_capacity;
        self
    }
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self {
            holiday: HolidayPolicy::default(),
            daily_capacity: DEFAULT_DAILY_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayClassification {
    pub iso_key: String,
    pub is_holiday: bool,
    pub is_past: bool,
    pub is_today: bool,
    pub available_count: u32,
    pub booked_count: u32,
}

/// Classifies one day against today's key and the month snapshot.
///
/// Holiday and count decisions are independent: a backend entry keeps its
/// counts even on the weekly holiday. A day with no entry that is neither
/// past nor a holiday is assumed open at full capacity.
pub fn classify_day(
    date: NaiveDate,
    today_iso_key: &str,
    snapshot: Option<&CalendarMonthSnapshot>,
    policy: &ClassificationPolicy,
) -> DayClassification {
    let iso_key = iso_key_of(date);
    let entry = snapshot.and_then(|s| s.get(&iso_key));

    let is_holiday = policy.holiday.is_weekly_holiday(date)
        || entry.is_some_and(|day| day.flagged_holiday());
    // Zero-padded ISO keys order the same way the dates do.
    let is_past = iso_key.as_str() < today_iso_key;
    let is_today = iso_key == today_iso_key;

    let (available_count, booked_count) = match entry {
        Some(day) => (day.summary.available_count, day.summary.booked_count),
        None if !is_past && !is_holiday => (policy.daily_capacity, 0),
        None => (0, 0),
    };

    DayClassification {
        iso_key,
        is_holiday,
        is_past,
        is_today,
        available_count,
        booked_count,
    }
}
