//! Plain-text schedule report.
//!
//! Fixed layout: a banner, then one block per section with a ` - ` bullet per
//! record. Assignment and exam dates go through
//! [`format_date`](coursework_core::date::format_date).

use std::io::{self, Write};

use coursework_core::date::format_date;
use coursework_core::model::{Assignment, Exam, Schedule};

/// Banner line printed above the sections.
pub const BANNER: &str = "--- Current Schedule ---";

/// Write the report for `schedule` to `out`.
pub fn write_text<W: Write>(schedule: &Schedule, mut out: W) -> io::Result<()> {
    write!(out, "\n{BANNER}\n\n")?;

    writeln!(out, "# Classes:")?;
    for class in &schedule.classes {
        writeln!(out, " - {class}")?;
    }

    writeln!(out, "\n# Assignments:")?;
    for assignment in &schedule.assignments {
        writeln!(out, "{}", assignment_line(assignment))?;
    }

    writeln!(out, "\n# Exams:")?;
    for exam in &schedule.exams {
        writeln!(out, "{}", exam_line(exam))?;
    }

    out.flush()
}

/// Render the report into a string.
pub fn render_text(schedule: &Schedule) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_text(schedule, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn assignment_line(a: &Assignment) -> String {
    let mut line = format!(
        " - {} | {} | Due on {}",
        a.class_name,
        a.assignment_name,
        format_date(&a.due_date)
    );
    if a.has_due_time() {
        line.push_str(" at ");
        line.push_str(&a.due_time);
    }
    line
}

fn exam_line(e: &Exam) -> String {
    format!(
        " - {} | {} | Exam on {}",
        e.class_name,
        e.exam_name,
        format_date(&e.exam_date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursework_core::parser::parse_schedule_str;

    const MINIMAL: &str = "BEGIN\n# Classes\nCS101\n# Assignments\nCS101|HW1|3/3/25|11:59PM\n# Exams\nCS101|Final|5/5/25\nEND";

    #[test]
    fn minimal_layout() {
        let schedule = parse_schedule_str(MINIMAL).schedule;
        let expected = "\n--- Current Schedule ---\n\n\
# Classes:\n - CS101\n\n\
# Assignments:\n - CS101 | HW1 | Due on March 3rd 2025 at 11:59PM\n\n\
# Exams:\n - CS101 | Final | Exam on May 5th 2025\n";
        assert_eq!(render_text(&schedule), expected);
    }

    #[test]
    fn empty_schedule_still_has_headers() {
        let text = render_text(&Schedule::default());
        assert_eq!(
            text,
            "\n--- Current Schedule ---\n\n# Classes:\n\n# Assignments:\n\n# Exams:\n"
        );
    }

    #[test]
    fn missing_due_time_omits_at_clause() {
        let schedule =
            parse_schedule_str("BEGIN\n# Assignments\nCS101|Homework 1|3/3/25\nEND").schedule;
        let text = render_text(&schedule);
        assert!(text.contains(" - CS101 | Homework 1 | Due on March 3rd 2025\n"));
        assert!(!text.contains(" at "));
    }

    #[test]
    fn bad_dates_render_as_invalid() {
        let schedule = parse_schedule_str(
            "BEGIN\n# Assignments\nCS101|HW|soon|noon\n# Exams\nCS101|Final|13/1/2024\nEND",
        )
        .schedule;
        let text = render_text(&schedule);
        assert!(text.contains(" - CS101 | HW | Due on Invalid Date at noon"));
        assert!(text.contains(" - CS101 | Final | Exam on Unknown 1st 2024"));
    }

    #[test]
    fn write_to_failing_sink() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let err = write_text(&Schedule::default(), Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
