//! Line input: reading trimmed lines and parsing the fields of a record.

use std::fmt;
use std::io::BufRead;

use crate::error::InputError;

/// The piece of input being asked for. Used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    RollNumber,
    Name,
    /// 1-indexed subject.
    Mark(usize),
}

impl Field {
    /// The field name at the start of a sentence.
    pub fn label(&self) -> String {
        let text = self.to_string();
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::RollNumber => f.write_str("roll number"),
            Field::Name => f.write_str("student name"),
            Field::Mark(subject) => write!(f, "marks for subject {}", subject),
        }
    }
}

/// Read one line and trim surrounding whitespace.
///
/// Returns `None` once the reader is exhausted. Invalid UTF-8 is replaced
/// with U+FFFD, so such a line fails to parse like any other bad value.
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

/// Parse a trimmed line as an integer.
pub fn parse_int(field: Field, text: &str) -> Result<i32, InputError> {
    if text.is_empty() {
        return Err(InputError::Empty(field));
    }
    text.parse().map_err(|_| InputError::NotANumber {
        field,
        text: text.to_string(),
    })
}

/// Require a non-empty trimmed line.
pub fn require_text(field: Field, text: String) -> Result<String, InputError> {
    if text.is_empty() {
        Err(InputError::Empty(field))
    } else {
        Ok(text)
    }
}
