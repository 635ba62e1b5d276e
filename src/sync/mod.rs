pub mod availability_api;
pub mod month_sync;
