//! Suggestion state machine
//!
//! Runs lookups on the tokio runtime and applies their outcomes through the
//! reducer. Every lookup is tagged with a request id; an outcome whose id is
//! not the current one is discarded, so the list always reflects the latest
//! request rather than the latest response.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::reducer::{LifecycleState, SuggestionAction, reduce, replaces_list};
use super::record::Suggestion;
use crate::lookup::{LookupError, LookupFuture, RawCountry};

/// A settled lookup, sent back from the spawned task
#[derive(Debug)]
pub struct LookupResponse {
    pub request_id: u64,
    pub result: Result<Vec<RawCountry>, LookupError>,
}

/// What happened to a settled lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Applied as the new list (possibly empty)
    Resolved { request_id: u64 },
    /// Applied as a failure
    Rejected { request_id: u64 },
    /// A newer request started before this one settled
    Superseded { request_id: u64 },
}

pub struct SuggestionState {
    state: LifecycleState,
    /// Incremented for each new request; outcomes for older ids are stale
    request_id: u64,
    /// Incremented each time the suggestion list is replaced
    revision: u64,
    runtime: Handle,
    response_tx: UnboundedSender<LookupResponse>,
    response_rx: UnboundedReceiver<LookupResponse>,
}

impl SuggestionState {
    pub fn new(runtime: Handle) -> Self {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        Self {
            state: LifecycleState::default(),
            request_id: 0,
            revision: 0,
            runtime,
            response_tx,
            response_rx,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.state.suggestions
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Start tracking a lookup
    ///
    /// `None` is a no-op. Otherwise the state goes to pending, the lookup is
    /// spawned, and its request id is returned.
    pub fn run(&mut self, lookup: Option<LookupFuture>) -> Option<u64> {
        let lookup = lookup?;

        self.dispatch(SuggestionAction::Pending);
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        let response_tx = self.response_tx.clone();
        self.runtime.spawn(async move {
            let result = lookup.await;
            // Receiver gone means the controller was dropped
            let _ = response_tx.send(LookupResponse { request_id, result });
        });

        log::debug!("Started lookup {}", request_id);
        Some(request_id)
    }

    /// Apply a transition directly
    pub fn dispatch(&mut self, action: SuggestionAction) {
        if replaces_list(&action) {
            self.revision = self.revision.wrapping_add(1);
        }
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Show exactly the selected record, discarding in-flight lookups
    pub fn select(&mut self, suggestion: Suggestion) {
        self.supersede_in_flight();
        self.dispatch(SuggestionAction::Resolved(vec![suggestion]));
    }

    /// Back to idle with nothing shown, discarding in-flight lookups
    pub fn reset(&mut self) {
        self.supersede_in_flight();
        self.dispatch(SuggestionAction::Reset);
    }

    fn supersede_in_flight(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
    }

    /// Apply every lookup that has settled, without waiting
    pub fn poll_responses(&mut self) -> Vec<Settlement> {
        let mut settled = Vec::new();
        while let Ok(response) = self.response_rx.try_recv() {
            settled.push(self.apply(response));
        }
        settled
    }

    /// Wait for the next lookup to settle and apply it
    pub async fn settle_next(&mut self) -> Option<Settlement> {
        let response = self.response_rx.recv().await?;
        Some(self.apply(response))
    }

    fn apply(&mut self, response: LookupResponse) -> Settlement {
        let LookupResponse { request_id, result } = response;

        if request_id != self.request_id {
            log::debug!(
                "Discarding stale lookup {} (current: {})",
                request_id,
                self.request_id
            );
            return Settlement::Superseded { request_id };
        }

        match result {
            Ok(records) => {
                let suggestions: Vec<Suggestion> =
                    records.into_iter().map(Suggestion::from).collect();
                log::debug!("Lookup {} resolved with {} records", request_id, suggestions.len());
                self.dispatch(SuggestionAction::Resolved(suggestions));
                Settlement::Resolved { request_id }
            }
            Err(error) => {
                log::warn!("Lookup {} failed: {}", request_id, error);
                self.dispatch(SuggestionAction::Rejected(error));
                Settlement::Rejected { request_id }
            }
        }
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
