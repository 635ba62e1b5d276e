use chrono::{Datelike, NaiveDate};

fn assert_month(month: u32) {
    assert!(
        (1..=12).contains(&month),
        "month must be in 1..=12, got {}",
        month
    );
}

/// First day of the given month.
///
/// # Panics
///
/// Panics if `month` is outside `1..=12` or the year is outside the range
/// chrono can represent.
pub fn first_of_month(year: i32, month: u32) -> NaiveDate {
    assert_month(month);
    NaiveDate::from_ymd_opt(year, month, 1).expect("year outside supported calendar range")
}

/// Number of days in the month, taken as the day before the first of the
/// following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = next_month(year, month);
    first_of_month(next_year, next_month)
        .pred_opt()
        .map(|last| last.day())
        .expect("year outside supported calendar range")
}

/// Weekday of day 1, with Sunday as 0.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    first_of_month(year, month).weekday().num_days_from_sunday()
}

pub fn to_iso_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

pub fn iso_key_of(date: NaiveDate) -> String {
    to_iso_key(date.year(), date.month(), date.day())
}

pub fn is_same_iso_key(a: &str, b: &str) -> bool {
    a == b
}

pub fn parse_iso_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    assert_month(month);
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    assert_month(month);
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_in_leap_year_has_29_days() {
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn february_in_common_year_has_28_days() {
        assert_eq!(days_in_month(2023, 2), 28);
    }

    #[test]
    fn century_rule_applies_to_leap_years() {
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(next_month(2024, 12), (2025, 1));
    }

    #[test]
    fn january_rolls_back_into_previous_year() {
        assert_eq!(previous_month(2025, 1), (2024, 12));
        assert_eq!(previous_month(2025, 6), (2025, 5));
    }

    #[test]
    fn thirty_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2025, month), 30);
        }
    }

    #[test]
    fn first_weekday_uses_sunday_as_zero() {
        // 2024-09-01 is a Sunday, 2024-06-01 a Saturday.
        assert_eq!(first_weekday_of_month(2024, 9), 0);
        assert_eq!(first_weekday_of_month(2024, 6), 6);
        assert_eq!(first_weekday_of_month(2024, 2), 4);
    }

    #[test]
    fn iso_key_is_zero_padded() {
        assert_eq!(to_iso_key(2024, 6, 7), "2024-06-07");
        assert_eq!(to_iso_key(987, 1, 2), "0987-01-02");
    }

    #[test]
    fn iso_key_of_date_matches_components() {
        let date = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        assert_eq!(iso_key_of(date), "2099-01-01");
    }

    #[test]
    fn same_iso_key_compares_exactly() {
        assert!(is_same_iso_key("2024-06-07", "2024-06-07"));
        assert!(!is_same_iso_key("2024-06-07", "2024-06-08"));
    }

    #[test]
    fn parse_iso_key_rejects_garbage() {
        assert_eq!(
            parse_iso_key("2024-06-07"),
            NaiveDate::from_ymd_opt(2024, 6, 7)
        );
        assert_eq!(parse_iso_key("2024-13-01"), None);
        assert_eq!(parse_iso_key("not a date"), None);
    }

    #[test]
    #[should_panic(expected = "month must be in 1..=12")]
    fn month_zero_fails_fast() {
        days_in_month(2024, 0);
    }

    #[test]
    #[should_panic(expected = "month must be in 1..=12")]
    fn month_thirteen_fails_fast() {
        first_weekday_of_month(2024, 13);
    }
}
