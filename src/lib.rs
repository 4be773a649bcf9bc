#![allow(clippy::module_inception)]

use std::{rc::Rc, time::Instant};

use log::info;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod toolchain;
pub mod type_checker;

extern crate regex;

/// Byte offset into the source, and the source name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn is_null(&self) -> bool {
        self.1.as_str() == "<null>"
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Translates Vyrn source into a complete C++17 program.
///
/// Each call parses from scratch and generates with a fresh type environment.
pub fn translate(source: &str, file: Option<String>) -> Result<String, Error> {
    let start = Instant::now();
    let statements = parser::parser::parse(source, file)?;
    info!("Parsed {} statements in {:?}", statements.len(), start.elapsed());

    let generate_start = Instant::now();
    let output = compiler::compiler::generate(&statements)?;
    info!("Generated C++ in {:?}", generate_start.elapsed());

    Ok(output)
}

/// Returns the 1-based line number, the line text and the column of a byte offset.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}


/// Renders an error as a caret diagnostic over the offending source line.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> final.vyrn
           |
        20 | let a = #;
           | --------^
    */

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let position = error.get_position();
    let located = if position.is_null() {
        None
    } else {
        get_line_at_position(source, position.0)
    };

    let Some((line, line_text, line_pos)) = located else {
        rendered.push_str(&format!("{}\n", error));
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("-> {}\n", position.1));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered.push_str(&format!("{}\n", error));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
