//! coursework-core — schedule model, parser, and date formatting.
//!
//! This crate reads the line-oriented `BEGIN`/`END` schedule format into a
//! [`model::Schedule`] and provides the helpers the report layer uses to turn
//! numeric dates into ordinal English phrases.

pub mod date;
pub mod error;
pub mod input;
pub mod model;
pub mod parser;
mod scan;
