use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::autocomplete::InputHost;

/// Single-line text field owning the query
pub struct QueryField {
    textarea: TextArea<'static>,
}

impl QueryField {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Country ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        textarea.set_placeholder_text("Type in a Country name");

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Apply an editing key; returns whether the content changed
    pub fn input(&mut self, key: ratatui::crossterm::event::KeyEvent) -> bool {
        self.textarea.input(key)
    }
}

impl Default for QueryField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHost for QueryField {
    fn on_change(&mut self, text: &str) {
        if self.text() == text {
            return;
        }
        self.textarea.move_cursor(CursorMove::Head);
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }
}
