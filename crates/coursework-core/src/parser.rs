//! Schedule file parser.
//!
//! Reads the `BEGIN`/`END` delimited text format into a [`Schedule`]:
//!
//! ```text
//! BEGIN
//! # Classes
//! CS101
//! # Assignments
//! CS101|HW1|3/3/25|11:59PM
//! # Exams
//! CS101|Final|5/5/25
//! END
//! ```

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ScheduleError;
use crate::model::{Assignment, Exam, Schedule, Section};

/// Marker line that opens the schedule block.
pub const BEGIN_MARKER: &str = "BEGIN";
/// Marker line that stops parsing.
pub const END_MARKER: &str = "END";
/// Field separator for assignment and exam lines.
pub const FIELD_DELIMITER: char = '|';
/// Class, name, date.
pub const MIN_RECORD_FIELDS: usize = 3;

/// A line that was skipped because it had too few fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// Section the line appeared in.
    pub section: Section,
    /// 1-based line number in the source text.
    pub line_number: usize,
    /// The offending line, verbatim.
    pub line: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.section {
            Section::Assignments => "assignment",
            Section::Exams => "exam",
            Section::Classes => "class",
        };
        write!(f, "Invalid {kind} format: {}", self.line)
    }
}

/// Result of parsing: the schedule plus every skipped line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSchedule {
    pub schedule: Schedule,
    pub warnings: Vec<ParseWarning>,
}

/// Read and parse a schedule file.
///
/// Only I/O failures are errors; a file with no `BEGIN` line parses to an
/// empty schedule.
pub fn read_schedule(path: &Path) -> Result<ParsedSchedule, ScheduleError> {
    let mut file = File::open(path).map_err(|source| ScheduleError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| ScheduleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    drop(file);

    // Invalid UTF-8 sequences become U+FFFD.
    let content = String::from_utf8_lossy(&bytes);

    let parsed = parse_schedule_str(&content);
    tracing::debug!(
        "read {}: {} classes, {} assignments, {} exams, {} warnings",
        path.display(),
        parsed.schedule.classes.len(),
        parsed.schedule.assignments.len(),
        parsed.schedule.exams.len(),
        parsed.warnings.len()
    );
    Ok(parsed)
}

/// Parse schedule text. Pure: the same input always gives the same output.
///
/// Lines are split with [`str::lines`], so a trailing `\r` is removed before
/// markers and headers are compared. CRLF files therefore parse like LF files,
/// where a byte-exact comparison would never see `BEGIN` in them.
pub fn parse_schedule_str(content: &str) -> ParsedSchedule {
    let mut parsed = ParsedSchedule::default();
    let mut section: Option<Section> = None;
    let mut in_schedule = false;

    for (idx, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        if line == BEGIN_MARKER {
            in_schedule = true;
            continue;
        }
        if line == END_MARKER {
            break;
        }
        if !in_schedule {
            continue;
        }

        if let Some(next) = Section::from_header(line) {
            tracing::debug!("entering section {next} at line {}", idx + 1);
            section = Some(next);
            continue;
        }

        let Some(current) = section else {
            continue;
        };

        match current {
            Section::Classes => parsed.schedule.classes.push(line.to_string()),
            Section::Assignments => match assignment_from_fields(&split_fields(line)) {
                Some(a) => parsed.schedule.assignments.push(a),
                None => parsed.skip(current, idx + 1, line),
            },
            Section::Exams => match exam_from_fields(&split_fields(line)) {
                Some(e) => parsed.schedule.exams.push(e),
                None => parsed.skip(current, idx + 1, line),
            },
        }
    }

    parsed
}

impl ParsedSchedule {
    fn skip(&mut self, section: Section, line_number: usize, line: &str) {
        let warning = ParseWarning {
            section,
            line_number,
            line: line.to_string(),
        };
        tracing::debug!("skipping line {line_number}: {warning}");
        self.warnings.push(warning);
    }
}

/// Split a record line on `|`, dropping empty fields.
///
/// Surrounding whitespace is kept, so `"a | b"` yields `["a ", " b"]`.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER)
        .filter(|field| !field.is_empty())
        .collect()
}

fn assignment_from_fields(fields: &[&str]) -> Option<Assignment> {
    if fields.len() < MIN_RECORD_FIELDS {
        return None;
    }
    Some(Assignment {
        class_name: fields[0].to_string(),
        assignment_name: fields[1].to_string(),
        due_date: fields[2].to_string(),
        due_time: fields.get(3).map(|t| t.to_string()).unwrap_or_default(),
    })
}

fn exam_from_fields(fields: &[&str]) -> Option<Exam> {
    if fields.len() < MIN_RECORD_FIELDS {
        return None;
    }
    Some(Exam {
        class_name: fields[0].to_string(),
        exam_name: fields[1].to_string(),
        exam_date: fields[2].to_string(),
    })
}
