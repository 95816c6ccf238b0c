//! Document loading and the row layout handed to renderers.

mod document;
mod layout;
mod resources;
mod types;

pub use document::Document;
pub use resources::{load_charmaps, load_registry, load_settings};
pub use types::{Cell, Row, RowGroup, Ruby, TermCell, TermTableError, WordCell};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
