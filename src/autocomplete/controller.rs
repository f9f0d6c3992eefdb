//! Navigation controller
//!
//! Turns keystrokes, pointer events and host syncs into lookups, focus
//! movement and selection commits.

use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tokio::runtime::Handle;

use super::host::InputHost;
use super::viewport::Visibility;
use crate::debounce::Debounced;
use crate::lookup::{CountryLookup, LookupFuture};
use crate::suggestions::{LifecycleState, Settlement, Suggestion, SuggestionState};

type LookupFn = Box<dyn FnMut(String) -> Option<LookupFuture> + Send>;

/// Whether the controller handled a key
///
/// `Consumed` keys must not reach the text field or any other handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Consumed,
    Ignored,
}

pub struct AutoComplete<V: Visibility> {
    suggestions: SuggestionState,
    dispatcher: Debounced<String, LookupFn>,
    focused: usize,
    display: bool,
    viewport: V,
    /// Index -> handle table published by the last render pass
    rendered: Vec<V::Handle>,
    /// `(query, display)` seen by the last sync
    last_effect: Option<(String, bool)>,
    seen_revision: u64,
}

impl<V: Visibility> AutoComplete<V> {
    pub fn new(
        lookup: Arc<dyn CountryLookup>,
        viewport: V,
        debounce: Duration,
        runtime: Handle,
    ) -> Self {
        let lookup_fn: LookupFn = Box::new(move |query: String| lookup.lookup(&query));
        let suggestions = SuggestionState::new(runtime);
        let seen_revision = suggestions.revision();

        Self {
            suggestions,
            dispatcher: Debounced::new(lookup_fn, debounce),
            focused: 0,
            display: false,
            viewport,
            rendered: Vec::new(),
            last_effect: None,
            seen_revision,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        self.suggestions.state()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        self.suggestions.suggestions()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions().get(self.focused)
    }

    /// Whether the suggestion panel is open
    pub fn is_open(&self) -> bool {
        self.display
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// When the next scheduled lookup becomes due, for event-loop timeouts
    pub fn next_deadline(&self) -> Option<Instant> {
        self.dispatcher.deadline()
    }

    /// Publish the handles of the items drawn by the current render pass
    pub fn set_rendered(&mut self, handles: Vec<V::Handle>) {
        self.rendered = handles;
    }

    /// Text field changed
    pub fn handle_input(&mut self, text: &str, host: &mut impl InputHost) {
        host.on_change(text);
        if !self.display {
            self.display = true;
        }
    }

    pub fn sync(&mut self, query: &str) {
        self.sync_at(query, Instant::now());
    }

    /// One event-loop tick
    ///
    /// Schedules a lookup if the query or the panel state changed while the
    /// panel is open, otherwise fires a due lookup. Then applies settled
    /// lookups.
    pub fn sync_at(&mut self, query: &str, now: Instant) {
        let unchanged = matches!(
            &self.last_effect,
            Some((last_query, last_display)) if last_query == query && *last_display == self.display
        );

        if unchanged {
            if let Some(lookup) = self.dispatcher.poll_at(now) {
                self.suggestions.run(lookup);
            }
        } else {
            self.last_effect = Some((query.to_string(), self.display));
            // A changed query supersedes whatever was scheduled
            if self.display {
                log::debug!("Scheduling lookup for {:?}", query);
                self.dispatcher.call_at(query.to_string(), now);
            }
        }

        self.suggestions.poll_responses();
        self.observe_revision();
    }

    /// Wait for the next lookup to settle and apply it
    pub async fn settle_next(&mut self) -> Option<Settlement> {
        let settled = self.suggestions.settle_next().await;
        self.observe_revision();
        settled
    }

    pub fn handle_key(&mut self, key: KeyEvent, host: &mut impl InputHost) -> KeyResult {
        match key.code {
            KeyCode::Enter => {
                if let Some(suggestion) = self.focused_suggestion().cloned() {
                    self.commit(suggestion, host);
                }
                KeyResult::Consumed
            }
            KeyCode::Down => {
                self.move_focus(1);
                KeyResult::Consumed
            }
            KeyCode::Up => {
                self.move_focus(-1);
                KeyResult::Consumed
            }
            _ => KeyResult::Ignored,
        }
    }

    /// Focus follows the pointer
    pub fn handle_hover(&mut self, index: usize) {
        if index < self.suggestions().len() {
            self.focused = index;
        }
    }

    pub fn handle_click(&mut self, index: usize, host: &mut impl InputHost) {
        if let Some(suggestion) = self.suggestions().get(index).cloned() {
            self.commit(suggestion, host);
        }
    }

    /// Moves stop at the list edges; there is no wrap-around
    fn move_focus(&mut self, delta: isize) {
        let Some(next) = self.focused.checked_add_signed(delta) else {
            return;
        };
        if next >= self.suggestions().len() {
            return;
        }

        if let Some(handle) = self.rendered.get(next)
            && !self.viewport.is_visible(handle)
        {
            self.viewport.scroll_into_view(handle, false);
        }
        self.focused = next;
    }

    fn commit(&mut self, suggestion: Suggestion, host: &mut impl InputHost) {
        log::debug!("Selected {} ({})", suggestion.primary_name, suggestion.id);
        host.on_change(&suggestion.primary_name);
        self.dispatcher.cancel();
        self.suggestions.select(suggestion);
        self.display = false;
        self.observe_revision();
    }

    fn observe_revision(&mut self) {
        let revision = self.suggestions.revision();
        if revision == self.seen_revision {
            return;
        }
        self.seen_revision = revision;
        self.focused = 0;
        self.rendered.clear();
        self.viewport.reset_scroll();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
