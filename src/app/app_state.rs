use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio::runtime::Handle;

use super::query_field::QueryField;
use crate::autocomplete::{AutoComplete, ListViewport};
use crate::config::Config;
use crate::lookup::CountryLookup;

/// Upper bound on how long the event loop blocks waiting for input
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub query: QueryField,
    pub autocomplete: AutoComplete<ListViewport>,
    /// Rows of the suggestion panel
    pub max_visible: u16,
    /// Inner area of the suggestion list from the last render
    pub list_area: Option<Rect>,
    pub should_quit: bool,
}

impl App {
    pub fn new(lookup: Arc<dyn CountryLookup>, config: &Config, runtime: Handle) -> Self {
        let max_visible = config.suggestions.max_visible.max(1);
        let autocomplete = AutoComplete::new(
            lookup,
            ListViewport::new(max_visible as usize),
            Duration::from_millis(config.suggestions.debounce_ms),
            runtime,
        );

        Self {
            query: QueryField::new(),
            autocomplete,
            max_visible,
            list_area: None,
            should_quit: false,
        }
    }

    /// Run one controller sync against the current query
    pub fn tick(&mut self) {
        self.autocomplete.sync(self.query.text());
    }

    /// How long to wait for terminal input before the next tick
    pub fn poll_timeout(&self) -> Duration {
        match self.autocomplete.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()).min(TICK),
            None => TICK,
        }
    }
}
