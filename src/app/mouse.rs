//! Mouse hover and click over the suggestion list

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let Some(index) = self.suggestion_at(mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved => self.autocomplete.handle_hover(index),
            MouseEventKind::Down(MouseButton::Left) => {
                self.autocomplete.handle_click(index, &mut self.query)
            }
            _ => {}
        }
    }

    /// Suggestion index under a terminal cell, if any
    fn suggestion_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.autocomplete.is_open() {
            return None;
        }
        let area = self.list_area?;

        if column < area.x
            || column >= area.x.saturating_add(area.width)
            || row < area.y
            || row >= area.y.saturating_add(area.height)
        {
            return None;
        }

        let relative_y = row.saturating_sub(area.y) as usize;
        let index = self.autocomplete.viewport().row_at(relative_y)?;
        (index < self.autocomplete.suggestions().len()).then_some(index)
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
