use std::collections::HashMap;

use crate::calendar::CalendarCell;

/// Resolves an ISO key to the classified cell a selection is checked against.
pub trait CellLookup {
    fn cell(&self, iso_key: &str) -> Option<&CalendarCell>;
}

impl CellLookup for HashMap<String, CalendarCell> {
    fn cell(&self, iso_key: &str) -> Option<&CalendarCell> {
        self.get(iso_key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Unselected,
    Selected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Option<&str>) + Send>;

/// Owns the selected day of one calendar view.
///
/// Only days that exist in the supplied lookup and are neither holidays nor
/// in the past are accepted. Subscribers hear about every change of the
/// selected key.
pub struct SelectionController {
    selected: Option<String>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            selected: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn selected_iso_key(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn state(&self) -> SelectionState {
        match &self.selected {
            Some(key) => SelectionState::Selected(key.clone()),
            None => SelectionState::Unselected,
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Option<&str>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Returns whether the key was accepted. Rejections leave the state untouched.
    pub fn select_date(&mut self, iso_key: &str, cells: &impl CellLookup) -> bool {
        let Some(cell) = cells.cell(iso_key) else {
            tracing::debug!("Ignoring selection of {}: not in the displayed month", iso_key);
            return false;
        };

        if cell.is_holiday || cell.is_past {
            tracing::debug!(
                "Ignoring selection of {}: holiday={}, past={}",
                iso_key,
                cell.is_holiday,
                cell.is_past
            );
            return false;
        }

        if self.selected.as_deref() != Some(iso_key) {
            self.selected = Some(iso_key.to_string());
            self.notify();
        }
        true
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.notify();
        }
    }

    fn notify(&mut self) {
        let selected = self.selected.as_deref();
        for (_, listener) in self.listeners.iter_mut() {
            listener(selected);
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("selected", &self.selected)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
