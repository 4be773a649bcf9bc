use std::rc::Rc;

use log::debug;

use crate::{Span, MK_POSITION};

use super::tokens::{Fragment, ScanState};

#[derive(Clone)]
pub struct Lexer {
    characters: Vec<(usize, char)>,
    fragments: Vec<Fragment>,
    current: String,
    current_start: Option<usize>,
    state: ScanState,
    pos: usize,
    source_len: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            characters: source.char_indices().collect(),
            fragments: vec![],
            current: String::new(),
            current_start: None,
            state: ScanState::Code,
            pos: 0,
            source_len: source.len(),
            file: file_name,
        }
    }

    pub fn at(&self) -> (usize, char) {
        self.characters[self.pos]
    }

    pub fn peek(&self) -> Option<char> {
        self.characters.get(self.pos + 1).map(|(_, character)| *character)
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.characters.len()
    }

    fn offset(&self) -> usize {
        if self.at_eof() {
            self.source_len
        } else {
            self.at().0
        }
    }

    fn push_char(&mut self, offset: usize, character: char) {
        if self.current_start.is_none() && !character.is_whitespace() {
            self.current_start = Some(offset);
        }
        self.current.push(character);
    }

    /// Closes the statement being accumulated. Empty statements are dropped.
    fn push_fragment(&mut self) {
        let end = self.offset();
        let text = self.current.trim().to_string();

        if let Some(start) = self.current_start {
            if !text.is_empty() {
                debug!("statement at {}: {}", start, text);
                self.fragments.push(Fragment {
                    text,
                    span: Span {
                        start: MK_POSITION!(start, self.file),
                        end: MK_POSITION!(end, self.file),
                    },
                });
            }
        }

        self.current.clear();
        self.current_start = None;
    }

    /// Replaces `// ...` up to (not including) the line break with spaces.
    fn skip_comment(&mut self) {
        while !self.at_eof() && self.at().1 != '\n' {
            let width = self.at().1.len_utf8();
            for _ in 0..width {
                self.current.push(' ');
            }
            self.advance();
        }
    }
}

/// Splits source text into trimmed statements.
///
/// `//` comments run to the end of the line, line breaks become spaces and
/// statements end at `;`. A `;` or `//` between matching quotes belongs to
/// the string. A trailing statement without `;` is kept.
pub fn split_statements(source: &str, file: Option<String>) -> Vec<Fragment> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let (offset, character) = lex.at();

        if lex.state.in_code() {
            if character == '/' && lex.peek() == Some('/') {
                lex.skip_comment();
                continue;
            }

            if character == ';' {
                lex.push_fragment();
                lex.advance();
                continue;
            }
        }

        lex.state = lex.state.step(character);

        if character == '\n' || character == '\r' {
            lex.push_char(offset, ' ');
        } else {
            lex.push_char(offset, character);
        }
        lex.advance();
    }

    lex.push_fragment();
    lex.fragments
}

