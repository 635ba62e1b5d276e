use chrono::{Datelike, Days, NaiveDate};

use crate::calendar::date_utils::{days_in_month, iso_key_of, parse_iso_key};
use crate::calendar::CalendarMonthSnapshot;
use crate::sync::availability_api::{ApiError, MonthKey};
use crate::sync::month_sync::{MonthSync, SnapshotStatus};
use crate::ui::month_view::{build_month_grid, GridOptions, GridRequest, MonthGrid};
use crate::ui::selection::{CellLookup, SelectionController};
use crate::ui::theme::Theme;

/// State of one mounted calendar view.
pub struct AppState {
    pub today: NaiveDate,
    pub cursor: NaiveDate,
    pub month_sync: MonthSync,
    pub selection: SelectionController,
    pub options: GridOptions,
    pub theme: Theme,
    pub show_help: bool,
    pub help_scroll: usize,
}

impl AppState {
    pub fn new(today: NaiveDate, resource_id: Option<String>) -> Self {
        let key = MonthKey::containing(today).with_resource(resource_id);
        Self {
            today,
            cursor: today,
            month_sync: MonthSync::new(key),
            selection: SelectionController::new(),
            options: GridOptions::default(),
            theme: Theme::default(),
            show_help: false,
            help_scroll: 0,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    pub fn displayed_month(&self) -> &MonthKey {
        self.month_sync.current()
    }

    pub fn grid(&self) -> MonthGrid {
        let key = self.displayed_month();
        build_month_grid(
            &GridRequest::new(key.year, key.month, self.today)
                .with_snapshot(self.month_sync.snapshot())
                .with_selected(self.selection.selected_iso_key())
                .with_options(self.options),
        )
    }

    /// Moves the cursor and returns the month to fetch if the view changed month.
    pub fn move_cursor_days(&mut self, days: i64) -> Option<MonthKey> {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days as u64))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        let target = moved?;
        self.jump_to(target)
    }

    pub fn jump_to(&mut self, date: NaiveDate) -> Option<MonthKey> {
        self.cursor = date;
        if self.displayed_month().contains(date) {
            return None;
        }
        let key = MonthKey::containing(date)
            .with_resource(self.displayed_month().resource_id.clone());
        Some(self.month_sync.navigate(key))
    }

    pub fn next_month(&mut self) -> MonthKey {
        let key = self.displayed_month().next();
        self.cursor = clamp_day(key.year, key.month, self.cursor.day());
        self.month_sync.navigate(key)
    }

    pub fn previous_month(&mut self) -> MonthKey {
        let key = self.displayed_month().previous();
        self.cursor = clamp_day(key.year, key.month, self.cursor.day());
        self.month_sync.navigate(key)
    }

    pub fn select_cursor(&mut self) -> bool {
        let grid = self.grid();
        let key = iso_key_of(self.cursor);
        self.selection.select_date(&key, &grid)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear_selection();
    }

    /// Applies a fetch result. Returns `false` when the response was stale.
    pub fn apply_fetch(
        &mut self,
        key: &MonthKey,
        result: Result<CalendarMonthSnapshot, ApiError>,
    ) -> bool {
        let applied = self.month_sync.accept(key, result);
        if applied {
            self.revalidate_selection();
        }
        applied
    }

    /// Advances the view's notion of today. Returns whether the date changed.
    pub fn set_today(&mut self, today: NaiveDate) -> bool {
        if today == self.today {
            return false;
        }
        self.today = today;
        self.revalidate_selection();
        true
    }

    /// Drops the selection once its day has become a holiday or slipped into the past.
    fn revalidate_selection(&mut self) {
        let Some(selected) = self.selection.selected_iso_key().map(str::to_string) else {
            return;
        };

        let grid = self.grid();
        let still_bookable = match grid.cell(&selected) {
            Some(cell) => cell.is_selectable(),
            None => parse_iso_key(&selected).is_some_and(|date| date >= self.today),
        };

        if !still_bookable {
            tracing::info!("Clearing selection of {}: day is no longer bookable", selected);
            self.selection.clear_selection();
        }
    }

    pub fn status_line(&self) -> String {
        let data = match self.month_sync.status() {
            SnapshotStatus::Pending => "loading".to_string(),
            SnapshotStatus::Loaded => "live".to_string(),
            SnapshotStatus::Unavailable(reason) => format!("offline ({})", reason),
        };
        let selected = self.selection.selected_iso_key().unwrap_or("none");
        format!("Availability: {} | Selected: {}", data, selected)
    }
}

fn clamp_day(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| crate::calendar::date_utils::first_of_month(year, month))
}
