//! Line-oriented input helpers for interactive commands.

use std::io::BufRead;

/// One line read from an interactive input stream.
#[derive(Debug, PartialEq, Eq)]
pub enum InputLine {
    /// Trimmed line (may be empty after trimming)
    Text(String),
    /// A full line was consumed but it is not valid UTF-8
    NotUtf8,
    /// EOF or read error; nothing more can be read
    Closed,
}

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// The whole line, including undecodable bytes, is consumed before UTF-8 is
/// checked, so a caller can report [`InputLine::NotUtf8`] and read again.
///
/// # Arguments
///
/// * `stdin` - Buffered reader to read from (typically stdin)
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use rpsls_cli::io_utils::{read_stdin_line, InputLine};
///
/// let mut input = Cursor::new(b"  3 \n\xff\n".to_vec());
/// assert_eq!(read_stdin_line(&mut input), InputLine::Text("3".into()));
/// assert_eq!(read_stdin_line(&mut input), InputLine::NotUtf8);
/// assert_eq!(read_stdin_line(&mut input), InputLine::Closed);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> InputLine {
    let mut raw = Vec::new();
    match stdin.read_until(b'\n', &mut raw) {
        Ok(0) => InputLine::Closed, // EOF
        Ok(_) => match String::from_utf8(raw) {
            Ok(line) => InputLine::Text(line.trim().to_string()),
            Err(_) => InputLine::NotUtf8,
        },
        Err(_) => InputLine::Closed, // Read error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn last_line_without_newline_is_still_read() {
        let mut input = Cursor::new("y");
        assert_eq!(read_stdin_line(&mut input), InputLine::Text("y".into()));
        assert_eq!(read_stdin_line(&mut input), InputLine::Closed);
    }

    #[test]
    fn undecodable_line_does_not_swallow_the_next_one() {
        let mut input = Cursor::new(b"\xff\xfe\n2\n".to_vec());
        assert_eq!(read_stdin_line(&mut input), InputLine::NotUtf8);
        assert_eq!(read_stdin_line(&mut input), InputLine::Text("2".into()));
    }
}
