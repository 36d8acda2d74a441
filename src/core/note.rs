use std::fmt;

use crate::error::ParseError;

pub const NOTE_CONSTRAINTS: &str = "Notes can take any values, and it should not be blank";

/// 教练笔记的三个分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Strength,
    Weakness,
    Misc,
}

impl NoteKind {
    pub fn label(&self) -> &'static str {
        match self {
            NoteKind::Strength => "strength",
            NoteKind::Weakness => "weakness",
            NoteKind::Misc => "misc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Note(String);

impl Note {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::invalid_value(NOTE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_keeps_inner_whitespace() {
        let note = Note::parse("  Note   Stub 1 ").unwrap();
        assert_eq!(note.as_str(), "Note   Stub 1");
    }

    #[test]
    fn blank_note_is_rejected() {
        assert!(Note::parse(" \t ").is_err());
    }
}
