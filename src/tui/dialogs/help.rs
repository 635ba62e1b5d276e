use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use lawdesk_cal::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 56;
    let help_height = 20;
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width.min(area.width),
        height: help_height.min(area.height),
    };

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled("lawdesk-cal Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Navigation:", Style::default().fg(app.theme.help_section))]),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Next/previous week"),
        Line::from("  { / }    - Previous/next month"),
        Line::from("  t        - Jump to today"),
        Line::from(""),
        Line::from(vec![Span::styled("Booking:", Style::default().fg(app.theme.help_section))]),
        Line::from("  Enter    - Select day under cursor"),
        Line::from("  Esc      - Clear selection"),
        Line::from("  Closed and past days cannot be selected."),
        Line::from(""),
        Line::from(vec![Span::styled("Colours:", Style::default().fg(app.theme.help_section))]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("open ", Style::default().fg(app.theme.available)),
            Span::styled("partly booked ", Style::default().fg(app.theme.mixed)),
            Span::styled("full ", Style::default().fg(app.theme.booked)),
            Span::styled("closed", Style::default().fg(app.theme.holiday)),
        ]),
        Line::from(""),
        Line::from("  ?        - Toggle this help"),
        Line::from("  q        - Quit"),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
