//! Typeahead navigation
//!
//! The controller plus the two collaborators it is wired to: the host that
//! owns the text field and the viewport that owns scrolling.

mod controller;
mod host;
mod viewport;

pub use controller::{AutoComplete, KeyResult};
pub use host::{InputHost, TextInput};
pub use viewport::{ListViewport, RowHandle, Visibility};
