use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    /// Words that can never name a binding: the statement keywords, the type
    /// names, the C++ entry point and the boolean literals.
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("let");
        set.insert("const");
        set.insert("print");
        set.insert("int");
        set.insert("float");
        set.insert("string");
        set.insert("bool");
        set.insert("main");
        set.insert("true");
        set.insert("false");
        set
    };
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_LOOKUP.contains(word)
}

/// Two-state quote tracker shared by the statement splitter and the
/// expression splitter.
///
/// There is no escape handling: the first matching quote always closes the
/// literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Code,
    InString(char),
}

impl ScanState {
    pub fn step(self, character: char) -> ScanState {
        match self {
            ScanState::Code if character == '"' || character == '\'' => {
                ScanState::InString(character)
            }
            ScanState::InString(quote) if character == quote => ScanState::Code,
            state => state,
        }
    }

    pub fn in_code(&self) -> bool {
        *self == ScanState::Code
    }
}

/// One `;`-separated statement, trimmed, with comments blanked out.
///
/// Comments are replaced by spaces rather than removed, so a byte index into
/// `text` plus the start offset is always a valid offset into the source.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub text: String,
    pub span: Span,
}

impl Fragment {
    /// Position of the byte at `index` within the fragment text.
    pub fn position_at(&self, index: usize) -> Position {
        Position(
            self.span.start.0 + index as u32,
            std::rc::Rc::clone(&self.span.start.1),
        )
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
