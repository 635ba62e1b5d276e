use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use lawdesk_cal::{app::AppState, sync::month_sync::SnapshotStatus};
use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(main_chunks[1]);

    let displayed = app.displayed_month();
    let title_text = match &displayed.resource_id {
        Some(resource) => format!("lawdesk-cal - Appointments - {}", resource),
        None => "lawdesk-cal - Appointments".to_string(),
    };

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    let grid = app.grid();
    calendar_views::month::render(f, app, &grid, content_chunks[0]);
    calendar_views::day_summary::render(f, app, &grid, content_chunks[1]);

    let status_color = if matches!(app.month_sync.status(), SnapshotStatus::Unavailable(_)) {
        app.theme.error
    } else {
        app.theme.status_bar
    };

    let status = Paragraph::new(format!("{} | Press 'q' to quit, '?' for help", app.status_line()))
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.show_help {
        dialogs::help::render(f, app);
    }
}
