//! Core data model types for coursework.
//!
//! Records are plain owned strings exactly as they appear in the schedule
//! file. Dates stay in their numeric `M/D/Y` form until rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A homework or project entry from the `# Assignments` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Class the assignment belongs to (not checked against the class list).
    pub class_name: String,
    /// Human-readable assignment name.
    pub assignment_name: String,
    /// Due date in `M/D/Y` form, e.g. `3/3/25`.
    pub due_date: String,
    /// Due time such as `11:59PM`; empty when the line has no fourth field.
    #[serde(default)]
    pub due_time: String,
}

impl Assignment {
    /// Whether a due time was given for this assignment.
    pub fn has_due_time(&self) -> bool {
        !self.due_time.is_empty()
    }
}

/// An entry from the `# Exams` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub class_name: String,
    pub exam_name: String,
    /// Exam date in `M/D/Y` form.
    pub exam_date: String,
}

/// Everything read from one schedule file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Class lines, stored verbatim (after lossy UTF-8 decoding of the file).
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub exams: Vec<Exam>,
}

impl Schedule {
    /// Returns `true` if no class, assignment, or exam was read.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.assignments.is_empty() && self.exams.is_empty()
    }
}

/// The named blocks inside `BEGIN`/`END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Classes,
    Assignments,
    Exams,
}

impl Section {
    /// The exact header line that opens this section.
    pub fn header(self) -> &'static str {
        match self {
            Section::Classes => "# Classes",
            Section::Assignments => "# Assignments",
            Section::Exams => "# Exams",
        }
    }

    /// Match a line against the three section headers. No trimming is done.
    pub fn from_header(line: &str) -> Option<Section> {
        [Section::Classes, Section::Assignments, Section::Exams]
            .into_iter()
            .find(|s| s.header() == line)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Classes => write!(f, "Classes"),
            Section::Assignments => write!(f, "Assignments"),
            Section::Exams => write!(f, "Exams"),
        }
    }
}
