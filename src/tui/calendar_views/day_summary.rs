use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use lawdesk_cal::{
    app::AppState,
    calendar::{date_utils::iso_key_of, DayStatus},
    ui::{month_view::MonthGrid, selection::CellLookup},
};

fn status_label(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Padding => "Outside this month",
        DayStatus::Holiday => "Closed (holiday)",
        DayStatus::Past => "Past",
        DayStatus::Today => "Today",
        DayStatus::Available => "Open",
        DayStatus::Booked => "Fully booked",
        DayStatus::Mixed => "Partly booked",
    }
}

pub fn render(f: &mut Frame, app: &AppState, grid: &MonthGrid, area: ratatui::layout::Rect) {
    let title = app.cursor.format("%A, %B %d, %Y").to_string();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    match grid.cell(&iso_key_of(app.cursor)) {
        Some(cell) => {
            let status = cell.status();
            lines.push(Line::from(vec![
                Span::raw("Status:    "),
                Span::styled(status_label(status), Style::default().fg(app.theme.day_color(status))),
            ]));
            lines.push(Line::from(format!("Open slots: {}", cell.available_count)));
            lines.push(Line::from(format!("Booked:     {}", cell.booked_count)));
            lines.push(Line::from(""));

            if cell.is_selected {
                lines.push(Line::from(vec![
                    Span::styled("Selected for booking", Style::default().fg(app.theme.selected_bg).add_modifier(Modifier::BOLD)),
                ]));
            } else if cell.is_selectable() {
                lines.push(Line::from(vec![
                    Span::styled("Enter", Style::default().fg(Color::Green)),
                    Span::raw(" = Select this day"),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::styled("Not available for booking", Style::default().fg(Color::DarkGray)),
                ]));
            }
        }
        None => {
            lines.push(Line::from(vec![
                Span::styled("Loading month...", Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("hjkl", Style::default().fg(Color::Cyan)),
        Span::raw(" = Move | "),
        Span::styled("{ }", Style::default().fg(Color::Cyan)),
        Span::raw(" = Month | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" = Clear"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
