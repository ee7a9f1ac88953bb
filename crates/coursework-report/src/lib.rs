//! coursework-report — renders a parsed schedule for people and tools.

pub mod json;
pub mod text;

pub use json::to_json;
pub use text::{render_text, write_text};
