use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use lawdesk_cal::{
    app::AppState,
    calendar::{date_utils::first_of_month, DayStatus},
    ui::month_view::MonthGrid,
};

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render(f: &mut Frame, app: &AppState, grid: &MonthGrid, area: ratatui::layout::Rect) {
    let month_name = first_of_month(grid.year, grid.month).format("%B %Y").to_string();

    let header: Vec<Span> = WEEKDAY_LABELS
        .iter()
        .map(|label| Span::styled(format!(" {} ", label), Style::default().fg(app.theme.weekday_header)))
        .collect();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(month_name, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(header),
    ];

    for week in grid.weeks() {
        let mut day_spans = Vec::new();

        for cell in week {
            let day_text = if cell.belongs_to_displayed_month {
                format!(" {:>2}  ", cell.date.day())
            } else {
                "     ".to_string()
            };

            let mut style = Style::default().fg(app.theme.day_color(cell.status()));

            if cell.is_selected {
                style = style
                    .bg(app.theme.selected_bg)
                    .fg(app.theme.selected_fg)
                    .add_modifier(Modifier::BOLD);
            } else if cell.belongs_to_displayed_month && cell.date == app.cursor {
                style = style.bg(app.theme.cursor_bg);
            }

            if cell.is_today {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }

            if cell.status() == DayStatus::Holiday || cell.status() == DayStatus::Past {
                style = style.add_modifier(Modifier::DIM);
            }

            day_spans.push(Span::styled(day_text, style));
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));
    lines.push(legend(app));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

fn legend(app: &AppState) -> Line<'static> {
    let theme = &app.theme;
    Line::from(vec![
        Span::styled("open", Style::default().fg(theme.available)),
        Span::raw(" | "),
        Span::styled("partly booked", Style::default().fg(theme.mixed)),
        Span::raw(" | "),
        Span::styled("full", Style::default().fg(theme.booked)),
        Span::raw(" | "),
        Span::styled("closed", Style::default().fg(theme.holiday)),
        Span::raw(" | "),
        Span::styled("today", Style::default().fg(theme.today)),
    ])
}
