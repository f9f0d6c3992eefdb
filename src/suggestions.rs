//! Suggestion lifecycle
//!
//! The record type, the pure reducer, and the state machine that runs
//! lookups and fences their outcomes by request id.

mod record;
mod reducer;
mod suggestion_state;

pub use record::Suggestion;
pub use reducer::{LifecycleState, LifecycleStatus, SuggestionAction, reduce};
pub use suggestion_state::{LookupResponse, Settlement, SuggestionState};
