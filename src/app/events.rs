//! Event loop and keyboard routing

use std::io;

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::autocomplete::KeyResult;

/// Draw, sync and dispatch terminal events until the user quits
pub fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.tick();

        if event::poll(app.poll_timeout())? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

impl App {
    /// Route a key press: quit keys, then the suggestion panel, then the field
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
            self.should_quit = true;
            return;
        }

        if self.autocomplete.handle_key(key, &mut self.query) == KeyResult::Consumed {
            return;
        }

        // The field is single-line
        if ctrl && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')) {
            return;
        }

        if self.query.input(key) {
            let text = self.query.text().to_string();
            self.autocomplete.handle_input(&text, &mut self.query);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
