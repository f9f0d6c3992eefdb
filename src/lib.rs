//! Country typeahead
//!
//! A debounced, race-free autocomplete controller for country names, with a
//! terminal front end.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod debounce;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod suggestions;
pub mod widgets;
