//! Terminal front end hosting the typeahead controller

mod app_state;
mod events;
mod mouse;
mod query_field;
mod render;

pub use app_state::App;
pub use events::run;
pub use query_field::QueryField;
