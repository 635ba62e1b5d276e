use chrono::NaiveDate;

use crate::calendar::classification::DayClassification;
use crate::calendar::date_utils::iso_key_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Padding,
    Holiday,
    Past,
    Today,
    Available,
    Booked,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub iso_key: String,
    pub is_holiday: bool,
    pub is_past: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub available_count: u32,
    pub booked_count: u32,
    pub belongs_to_displayed_month: bool,
}

impl CalendarCell {
    /// A filler cell borrowed from an adjacent month. Never selectable.
    pub fn padding(date: NaiveDate) -> Self {
        Self {
            date,
            iso_key: iso_key_of(date),
            is_holiday: false,
            is_past: false,
            is_today: false,
            is_selected: false,
            available_count: 0,
            booked_count: 0,
            belongs_to_displayed_month: false,
        }
    }

    pub fn classified(date: NaiveDate, classification: DayClassification) -> Self {
        Self {
            date,
            iso_key: classification.iso_key,
            is_holiday: classification.is_holiday,
            is_past: classification.is_past,
            is_today: classification.is_today,
            is_selected: false,
            available_count: classification.available_count,
            booked_count: classification.booked_count,
            belongs_to_displayed_month: true,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn is_selectable(&self) -> bool {
        self.belongs_to_displayed_month && !self.is_holiday && !self.is_past
    }

    pub fn status(&self) -> DayStatus {
        if !self.belongs_to_displayed_month {
            DayStatus::Padding
        } else if self.is_holiday {
            DayStatus::Holiday
        } else if self.is_past {
            DayStatus::Past
        } else if self.is_today {
            DayStatus::Today
        } else if self.available_count == 0 {
            DayStatus::Booked
        } else if self.booked_count == 0 {
            DayStatus::Available
        } else {
            DayStatus::Mixed
        }
    }
}
