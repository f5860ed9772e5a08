//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_prefixed() {
        let mut buf = Vec::new();
        write_error(&mut buf, "oops").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: oops\n");
    }
}
