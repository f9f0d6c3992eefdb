//! Lifecycle reducer
//!
//! Pure transition function over the suggestion lifecycle. Every transition
//! keeps status, error and list mutually consistent.

use super::record::Suggestion;
use crate::lookup::LookupError;

/// Lifecycle of the current lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleStatus {
    #[default]
    Idle,
    Pending,
    Resolved,
    Rejected,
}

/// Transition requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionAction {
    /// A lookup started; keeps the previous list so it does not flash empty
    Pending,
    /// A lookup (or a selection) produced this list
    Resolved(Vec<Suggestion>),
    /// The lookup failed
    Rejected(LookupError),
    /// Status only
    Idle,
    /// Back to idle with nothing shown
    Reset,
}

/// Everything the suggestion panel renders from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LifecycleState {
    pub status: LifecycleStatus,
    pub suggestions: Vec<Suggestion>,
    pub error: Option<LookupError>,
}

impl LifecycleState {
    pub fn is_loading(&self) -> bool {
        self.status == LifecycleStatus::Pending
    }

    /// A lookup finished and found nothing
    pub fn has_no_results(&self) -> bool {
        self.status == LifecycleStatus::Resolved && self.suggestions.is_empty()
    }
}

pub fn reduce(state: LifecycleState, action: SuggestionAction) -> LifecycleState {
    match action {
        SuggestionAction::Pending => LifecycleState {
            status: LifecycleStatus::Pending,
            error: None,
            ..state
        },
        SuggestionAction::Resolved(suggestions) => LifecycleState {
            status: LifecycleStatus::Resolved,
            suggestions,
            error: None,
        },
        SuggestionAction::Rejected(error) => LifecycleState {
            status: LifecycleStatus::Rejected,
            suggestions: Vec::new(),
            error: Some(error),
        },
        SuggestionAction::Idle => LifecycleState {
            status: LifecycleStatus::Idle,
            ..state
        },
        SuggestionAction::Reset => LifecycleState::default(),
    }
}

/// Whether an action replaces the suggestion list
pub fn replaces_list(action: &SuggestionAction) -> bool {
    match action {
        SuggestionAction::Resolved(_) | SuggestionAction::Rejected(_) | SuggestionAction::Reset => {
            true
        }
        SuggestionAction::Pending | SuggestionAction::Idle => false,
    }
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod reducer_tests;
