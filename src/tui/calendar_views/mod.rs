pub mod day_summary;
pub mod month;
