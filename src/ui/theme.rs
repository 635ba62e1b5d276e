use ratatui::style::Color;

use crate::calendar::DayStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub weekday_header: Color,
    pub padding_day: Color,
    pub holiday: Color,
    pub past: Color,
    pub today: Color,
    pub available: Color,
    pub booked: Color,
    pub mixed: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub cursor_bg: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub error: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            weekday_header: Color::Yellow,
            padding_day: Color::DarkGray,
            holiday: Color::Red,
            past: Color::DarkGray,
            today: Color::Green,
            available: Color::White,
            booked: Color::Magenta,
            mixed: Color::LightYellow,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            cursor_bg: Color::DarkGray,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            error: Color::Red,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            weekday_header: Color::Rgb(254, 128, 25),
            padding_day: Color::Rgb(102, 92, 84),
            holiday: Color::Rgb(251, 73, 52),
            past: Color::Rgb(146, 131, 116),
            today: Color::Rgb(184, 187, 38),
            available: Color::Rgb(235, 219, 178),
            booked: Color::Rgb(211, 134, 155),
            mixed: Color::Rgb(250, 189, 47),
            selected_bg: Color::Rgb(69, 133, 136),
            selected_fg: Color::Rgb(235, 219, 178),
            cursor_bg: Color::Rgb(60, 56, 54),
            status_bar: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            error: Color::Rgb(251, 73, 52),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            weekday_header: Color::Rgb(235, 203, 139),
            padding_day: Color::Rgb(67, 76, 94),
            holiday: Color::Rgb(191, 97, 106),
            past: Color::Rgb(76, 86, 106),
            today: Color::Rgb(163, 190, 140),
            available: Color::Rgb(236, 239, 244),
            booked: Color::Rgb(180, 142, 173),
            mixed: Color::Rgb(208, 135, 112),
            selected_bg: Color::Rgb(94, 129, 172),
            selected_fg: Color::Rgb(236, 239, 244),
            cursor_bg: Color::Rgb(59, 66, 82),
            status_bar: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            error: Color::Rgb(191, 97, 106),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord"]
    }

    pub fn day_color(&self, status: DayStatus) -> Color {
        match status {
            DayStatus::Padding => self.padding_day,
            DayStatus::Holiday => self.holiday,
            DayStatus::Past => self.past,
            DayStatus::Today => self.today,
            DayStatus::Available => self.available,
            DayStatus::Booked => self.booked,
            DayStatus::Mixed => self.mixed,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
