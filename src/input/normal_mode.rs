use crossterm::event::KeyCode;

use crate::app::AppState;
use crate::sync::availability_api::MonthKey;

#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Continue,
    Quit,
    /// The displayed month changed; its availability must be fetched.
    Fetch(MonthKey),
}

impl From<Option<MonthKey>> for KeyOutcome {
    fn from(fetch: Option<MonthKey>) -> Self {
        fetch.map_or(KeyOutcome::Continue, KeyOutcome::Fetch)
    }
}

pub fn handle_key(key: KeyCode, state: &mut AppState) -> KeyOutcome {
    if state.show_help {
        handle_help_key(key, state);
        return KeyOutcome::Continue;
    }

    match key {
        KeyCode::Char('q') => KeyOutcome::Quit,
        KeyCode::Char('h') | KeyCode::Left => state.move_cursor_days(-1).into(),
        KeyCode::Char('l') | KeyCode::Right => state.move_cursor_days(1).into(),
        KeyCode::Char('j') | KeyCode::Down => state.move_cursor_days(7).into(),
        KeyCode::Char('k') | KeyCode::Up => state.move_cursor_days(-7).into(),
        KeyCode::Char('{') => KeyOutcome::Fetch(state.previous_month()),
        KeyCode::Char('}') => KeyOutcome::Fetch(state.next_month()),
        KeyCode::Char('t') => {
            let today = state.today;
            state.jump_to(today).into()
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.select_cursor();
            KeyOutcome::Continue
        }
        KeyCode::Esc => {
            state.clear_selection();
            KeyOutcome::Continue
        }
        KeyCode::Char('?') => {
            state.show_help = true;
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

fn handle_help_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('j') => {
            state.help_scroll = state.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
            state.show_help = false;
            state.help_scroll = 0;
        }
        _ => {}
    }
}
