//! Schedule reader error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort reading a schedule file.
///
/// Malformed records are not errors; they surface as
/// [`ParseWarning`](crate::parser::ParseWarning)s instead.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The schedule file could not be opened.
    #[error("error opening file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but reading its contents failed.
    #[error("error reading file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
