//! Range-checked numeric input for interactive menus.
//!
//! Nothing in the `coursework` binary prompts the user today; this is the
//! primitive a menu would build on.

use std::io::{self, BufRead, Write};

use crate::scan::{skip_ascii_ws, split_int};

/// Read a choice in `1..=max`, re-prompting until one is entered.
///
/// Each line is read up to its first integer; anything after it is discarded.
/// Lines that are blank are skipped without a new prompt. Invalid input writes
/// `Invalid choice. Please enter a number from 1 to <max>: ` to `output`.
///
/// Returns `UnexpectedEof` if input runs out and `InvalidInput` if `max` is
/// zero, since no value could ever satisfy the range.
pub fn read_choice<R, W>(mut input: R, mut output: W, max: u32) -> io::Result<u32>
where
    R: BufRead,
    W: Write,
{
    if max == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "choice range must contain at least one value",
        ));
    }

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid choice was entered",
            ));
        }

        let text = skip_ascii_ws(&line);
        if text.is_empty() {
            continue;
        }

        match split_int(text).and_then(|(digits, _)| digits.parse::<i64>().ok()) {
            Some(n) if (1..=i64::from(max)).contains(&n) => return Ok(n as u32),
            _ => {
                tracing::debug!("rejected choice input {:?}", text.trim_end());
                write!(
                    output,
                    "Invalid choice. Please enter a number from 1 to {max}: "
                )?;
                output.flush()?;
            }
        }
    }
}

/// [`read_choice`] bound to the process's stdin and stdout.
pub fn read_choice_stdin(max: u32) -> io::Result<u32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_choice(stdin.lock(), stdout.lock(), max)
}
