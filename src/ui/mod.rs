pub mod month_view;
pub mod selection;
pub mod theme;
