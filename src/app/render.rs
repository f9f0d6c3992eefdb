use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::autocomplete::RowHandle;
use crate::suggestions::LifecycleStatus;
use crate::widgets::highlight::highlight_spans;

const PANEL_BORDER_HEIGHT: u16 = 2;
const HELP_KEYS: &str = " ↑/↓ navigate   Enter select   mouse hover/click   Esc quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let panel_height = if self.autocomplete.is_open() {
            self.max_visible + PANEL_BORDER_HEIGHT
        } else {
            0
        };

        let [input_area, panel_area, status_area, help_area, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(panel_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(frame.area());

        frame.render_widget(self.query.textarea(), input_area);

        if self.autocomplete.is_open() {
            self.render_panel(frame, panel_area);
        } else {
            self.list_area = None;
        }

        frame.render_widget(self.status_line(), status_area);
        frame.render_widget(
            Paragraph::new(HELP_KEYS).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }

    /// Render the suggestion list below the input field
    fn render_panel(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let count = self.autocomplete.suggestions().len();
        self.autocomplete
            .viewport_mut()
            .update_bounds(count, inner.height as usize);
        self.list_area = Some(inner);

        if count == 0 {
            let message = match self.autocomplete.state().status {
                LifecycleStatus::Pending => "Searching…",
                LifecycleStatus::Resolved | LifecycleStatus::Rejected => "No results",
                LifecycleStatus::Idle => "",
            };
            frame.render_widget(
                Paragraph::new(message).style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            self.autocomplete.set_rendered(Vec::new());
            return;
        }

        let keyword = self.query.text().to_string();
        let focused = self.autocomplete.focused();
        let offset = self.autocomplete.viewport().offset;
        let end = (offset + inner.height as usize).min(count);

        let lines: Vec<Line> = self.autocomplete.suggestions()[offset..end]
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let base = if offset + i == focused {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default()
                };
                let emphasis = base.add_modifier(Modifier::BOLD);
                Line::from(highlight_spans(&suggestion.label(), &keyword, base, emphasis))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        self.autocomplete.set_rendered((0..count).map(RowHandle).collect());
    }

    fn status_line(&self) -> Paragraph<'static> {
        let state = self.autocomplete.state();
        let span = if let Some(error) = &state.error {
            Span::styled(format!(" {}", error), Style::default().fg(Color::Red))
        } else {
            match state.status {
                LifecycleStatus::Pending => {
                    Span::styled(" Searching…", Style::default().fg(Color::Yellow))
                }
                LifecycleStatus::Resolved if self.autocomplete.is_open() => {
                    let n = state.suggestions.len();
                    let label = if n == 1 { "match" } else { "matches" };
                    Span::styled(format!(" {} {}", n, label), Style::default().fg(Color::Green))
                }
                _ => Span::raw(""),
            }
        };
        Paragraph::new(Line::from(span))
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
