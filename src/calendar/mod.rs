pub mod cell;
pub mod classification;
pub mod date_utils;
pub mod snapshot;

pub use cell::{CalendarCell, DayStatus};
pub use classification::{
    classify_day, ClassificationPolicy, DayClassification, HolidayPolicy, DEFAULT_DAILY_CAPACITY,
    DEFAULT_HOLIDAY_WEEKDAY,
};
pub use snapshot::{decode_snapshot_response, CalendarMonthSnapshot, DaySnapshot, DaySummary};
