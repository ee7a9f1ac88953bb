//! JSON export of a schedule.
//!
//! Dates are emitted as written in the source file; formatting is a
//! presentation concern of the text report.

use anyhow::{Context, Result};

use coursework_core::model::Schedule;

/// Serialize a schedule to pretty-printed JSON.
pub fn to_json(schedule: &Schedule) -> Result<String> {
    serde_json::to_string_pretty(schedule).context("failed to serialize schedule")
}

/// Read a schedule back from JSON produced by [`to_json`].
pub fn from_json(json: &str) -> Result<Schedule> {
    serde_json::from_str(json).context("failed to parse schedule JSON")
}
