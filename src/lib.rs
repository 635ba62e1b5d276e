pub mod calendar;
pub mod input;
pub mod ui;
pub mod sync;
pub mod storage;
pub mod app;

pub use calendar::{CalendarCell, CalendarMonthSnapshot, DayStatus};
pub use app::AppState;
pub use ui::month_view::{build_month_grid, GridOptions, GridRequest, MonthGrid};
pub use ui::selection::{CellLookup, SelectionController, SelectionState};
