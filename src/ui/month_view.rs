use chrono::{Days, NaiveDate};

use crate::calendar::classification::{classify_day, ClassificationPolicy};
use crate::calendar::date_utils::{
    days_in_month, first_of_month, first_weekday_of_month, iso_key_of, is_same_iso_key,
    next_month,
};
use crate::calendar::{CalendarCell, CalendarMonthSnapshot};
use crate::ui::selection::CellLookup;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridOptions {
    pub policy: ClassificationPolicy,
    /// Fill the last row with days of the next month so every row has 7 cells.
    pub pad_trailing_week: bool,
}

/// Everything the grid depends on. "Today" is passed in, never read from the clock.
#[derive(Debug, Clone, Copy)]
pub struct GridRequest<'a> {
    pub year: i32,
    pub month: u32,
    pub today: NaiveDate,
    pub snapshot: Option<&'a CalendarMonthSnapshot>,
    pub selected_iso_key: Option<&'a str>,
    pub options: GridOptions,
}

impl<'a> GridRequest<'a> {
    pub fn new(year: i32, month: u32, today: NaiveDate) -> Self {
        Self {
            year,
            month,
            today,
            snapshot: None,
            selected_iso_key: None,
            options: GridOptions::default(),
        }
    }

    pub fn with_snapshot(mut self, snapshot: Option<&'a CalendarMonthSnapshot>) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub fn with_selected(mut self, selected_iso_key: Option<&'a str>) -> Self {
        self.selected_iso_key = selected_iso_key;
        self
    }

    pub fn with_options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Rows of up to 7 cells, Sunday first. The last row may be short.
    pub fn weeks(&self) -> Vec<&[CalendarCell]> {
        self.cells.chunks(7).collect()
    }

    pub fn leading_padding(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| !cell.belongs_to_displayed_month)
            .count()
    }

    pub fn month_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells.iter().filter(|cell| cell.belongs_to_displayed_month)
    }

    pub fn selected_cell(&self) -> Option<&CalendarCell> {
        self.month_cells().find(|cell| cell.is_selected)
    }
}

impl CellLookup for MonthGrid {
    fn cell(&self, iso_key: &str) -> Option<&CalendarCell> {
        self.month_cells()
            .find(|cell| is_same_iso_key(&cell.iso_key, iso_key))
    }
}

pub fn build_month_grid(request: &GridRequest<'_>) -> MonthGrid {
    let GridRequest { year, month, today, snapshot, selected_iso_key, options } = *request;

    let first_day = first_of_month(year, month);
    let leading = first_weekday_of_month(year, month) as u64;
    let day_count = days_in_month(year, month);
    let today_iso_key = iso_key_of(today);

    let mut cells = Vec::with_capacity(leading as usize + day_count as usize + 6);

    cells.extend(
        (1..=leading)
            .rev()
            .filter_map(|offset| first_day.checked_sub_days(Days::new(offset)))
            .map(CalendarCell::padding),
    );

    for date in first_day.iter_days().take(day_count as usize) {
        let classification = classify_day(date, &today_iso_key, snapshot, &options.policy);
        let is_selected = selected_iso_key
            .is_some_and(|selected| is_same_iso_key(&classification.iso_key, selected));

        cells.push(CalendarCell::classified(date, classification).with_selected(is_selected));
    }

    if options.pad_trailing_week {
        let (next_year, next_month) = next_month(year, month);
        let trailing = (7 - cells.len() % 7) % 7;
        cells.extend(
            first_of_month(next_year, next_month)
                .iter_days()
                .take(trailing)
                .map(CalendarCell::padding),
        );
    }

    tracing::debug!(
        "Built grid for {}-{:02}: {} cells, snapshot {}",
        year,
        month,
        cells.len(),
        if snapshot.is_some() { "present" } else { "absent" }
    );

    MonthGrid { year, month, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{DaySnapshot, DayStatus, DEFAULT_DAILY_CAPACITY};
    use chrono::{Datelike, Weekday};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn june_2024_starts_after_six_padding_cells() {
        let grid = build_month_grid(&GridRequest::new(2024, 6, date(2024, 6, 5)));

        assert_eq!(grid.leading_padding(), 6);
        assert_eq!(grid.cells.len(), 36);
        assert_eq!(grid.cells[0].iso_key, "2024-05-26");
        assert_eq!(grid.cells[5].iso_key, "2024-05-31");
        assert_eq!(grid.cells[6].iso_key, "2024-06-01");
    }

    #[test]
    fn month_starting_on_sunday_has_no_padding() {
        let grid = build_month_grid(&GridRequest::new(2024, 9, date(2024, 9, 1)));

        assert_eq!(grid.leading_padding(), 0);
        assert_eq!(grid.cells.len(), 30);
    }

    #[test]
    fn padding_cells_carry_no_flags() {
        let grid = build_month_grid(&GridRequest::new(2024, 6, date(2030, 1, 1)));

        for cell in grid.cells.iter().take(grid.leading_padding()) {
            assert!(!cell.belongs_to_displayed_month);
            assert!(!cell.is_holiday);
            assert!(!cell.is_past);
            assert!(!cell.is_today);
            assert!(!cell.is_selected);
            assert_eq!((cell.available_count, cell.booked_count), (0, 0));
        }
    }

    #[test]
    fn today_and_selection_are_marked() {
        let grid = build_month_grid(
            &GridRequest::new(2024, 6, date(2024, 6, 5)).with_selected(Some("2024-06-12")),
        );

        let today: Vec<_> = grid.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].iso_key, "2024-06-05");
        assert_eq!(grid.selected_cell().map(|c| c.iso_key.as_str()), Some("2024-06-12"));
    }

    #[test]
    fn selection_outside_month_marks_nothing() {
        let grid = build_month_grid(
            &GridRequest::new(2024, 6, date(2024, 6, 5)).with_selected(Some("2024-05-31")),
        );

        assert!(grid.cells.iter().all(|c| !c.is_selected));
    }

    #[test]
    fn friday_entry_is_holiday_with_snapshot_counts() {
        let snapshot = CalendarMonthSnapshot::new().with_day("2024-06-07", DaySnapshot::new(2, 4));
        let grid = build_month_grid(
            &GridRequest::new(2024, 6, date(2024, 6, 1)).with_snapshot(Some(&snapshot)),
        );

        let cell = grid.cell("2024-06-07").unwrap();

        assert!(cell.is_holiday);
        assert_eq!(cell.available_count, 2);
        assert_eq!(cell.booked_count, 4);
        assert_eq!(cell.status(), DayStatus::Holiday);
    }

    #[test]
    fn lookup_ignores_padding_cells() {
        let grid = build_month_grid(&GridRequest::new(2024, 6, date(2024, 6, 1)));

        assert!(grid.cell("2024-05-31").is_none());
        assert!(grid.cell("2024-06-30").is_some());
    }

    #[test]
    fn trailing_padding_completes_last_week() {
        let options = GridOptions { pad_trailing_week: true, ..GridOptions::default() };
        let grid = build_month_grid(
            &GridRequest::new(2024, 6, date(2024, 6, 1)).with_options(options),
        );

        assert_eq!(grid.cells.len(), 42);
        assert_eq!(grid.cells.last().map(|c| c.iso_key.as_str()), Some("2024-07-06"));
        assert!(grid.weeks().iter().all(|week| week.len() == 7));
    }

    #[test]
    fn weeks_allow_short_last_row() {
        let grid = build_month_grid(&GridRequest::new(2024, 6, date(2024, 6, 1)));
        let weeks = grid.weeks();

        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[5].len(), 1);
    }

    #[test]
    fn same_request_builds_same_grid() {
        let snapshot = CalendarMonthSnapshot::new().with_day("2024-06-11", DaySnapshot::new(1, 5));
        let request = GridRequest::new(2024, 6, date(2024, 6, 5))
            .with_snapshot(Some(&snapshot))
            .with_selected(Some("2024-06-11"));

        assert_eq!(build_month_grid(&request), build_month_grid(&request));
    }

    fn arb_snapshot(year: i32, month: u32) -> impl Strategy<Value = CalendarMonthSnapshot> {
        let day_count = days_in_month(year, month);
        proptest::collection::vec(
            (1..=day_count, 0u32..10, 0u32..10, proptest::option::of(any::<bool>())),
            0..20,
        )
        .prop_map(move |entries| {
            entries
                .into_iter()
                .map(|(day, available, booked, holiday)| {
                    let mut entry = DaySnapshot::new(available, booked);
                    entry.is_holiday = holiday;
                    (crate::calendar::date_utils::to_iso_key(year, month, day), entry)
                })
                .collect()
        })
    }

    fn arb_month_with_snapshot() -> impl Strategy<Value = (i32, u32, CalendarMonthSnapshot)> {
        (1900i32..2200, 1u32..=12)
            .prop_flat_map(|(year, month)| (Just(year), Just(month), arb_snapshot(year, month)))
    }

    proptest! {
        #[test]
        fn grid_length_is_padding_plus_days(year in 1900i32..2200, month in 1u32..=12, pad in any::<bool>()) {
            let options = GridOptions { pad_trailing_week: pad, ..GridOptions::default() };
            let grid = build_month_grid(
                &GridRequest::new(year, month, date(2000, 1, 1)).with_options(options),
            );
            let expected = (first_weekday_of_month(year, month) + days_in_month(year, month)) as usize;

            if pad {
                prop_assert_eq!(grid.cells.len() % 7, 0);
                prop_assert!(grid.cells.len() >= expected && grid.cells.len() < expected + 7);
            } else {
                prop_assert_eq!(grid.cells.len(), expected);
            }
            prop_assert_eq!(grid.month_cells().count(), days_in_month(year, month) as usize);
        }

        #[test]
        fn fridays_are_always_holidays((year, month, snapshot) in arb_month_with_snapshot()) {
            let grid = build_month_grid(
                &GridRequest::new(year, month, date(2000, 1, 1)).with_snapshot(Some(&snapshot)),
            );

            for cell in grid.month_cells().filter(|c| c.date.weekday() == Weekday::Fri) {
                prop_assert!(cell.is_holiday);
            }
        }

        #[test]
        fn open_days_without_entry_have_default_capacity(
            (year, month, snapshot) in arb_month_with_snapshot(),
            today_offset in 0i64..60,
        ) {
            let today = first_of_month(year, month) + chrono::Duration::days(today_offset - 30);
            let grid = build_month_grid(
                &GridRequest::new(year, month, today).with_snapshot(Some(&snapshot)),
            );

            for cell in grid.month_cells() {
                if snapshot.get(&cell.iso_key).is_none() && !cell.is_past && !cell.is_holiday {
                    prop_assert_eq!(cell.available_count, DEFAULT_DAILY_CAPACITY);
                    prop_assert_eq!(cell.booked_count, 0);
                }
            }
        }
    }
}
