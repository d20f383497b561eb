//! Reader for circuit descriptions.
//!
//! A description is a flat stream of whitespace separated fields: the
//! operating frequency, the source voltage, then one group. Line breaks are
//! insignificant, so the same text can be typed on one line or laid out as an
//! indented tree.
//!
//! # Grammar Overview
//!
//! ```text
//! input         = frequency voltage group
//! group         = configuration element_count { element }
//! configuration = "series" | "parallel"
//! element       = ("c" | "component") leaf | ("g" | "group") group
//! leaf          = kind magnitude
//! kind          = "resistor" | "capacitor" | "inductor"
//! comment       = ('#' | ';') { any_char }
//!
//! number        = ['-'|'+'] digit* ['.' digit*] [('e'|'E') ['-'|'+'] digit+] [unit_suffix]
//! unit_suffix   = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! ```
//!
//! Keywords are case-insensitive. `element_count` is a non-negative integer
//! and counts accepted elements only: with [`Recovery::Retry`] a rejected
//! slot is read again from the next tokens.
//!
//! Nesting depth is not limited; parsing, building and evaluation each recurse
//! once per level, so extremely deep input can exhaust the stack.
//!
//! # Example
//!
//! ```text
//! # 10 ohms in series with two 20 ohm resistors in parallel
//! 60 10
//! series 2
//!   c resistor 10
//!   g parallel 2
//!     c resistor 20
//!     c resistor 20
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::{Parser, Recovery};

use crate::error::Result;

/// Parse a circuit description, aborting on the first malformed slot.
pub fn parse(input: &str) -> Result<NetlistAst> {
    parse_with(input, Recovery::Abort)
}

/// Parse a circuit description with the given recovery policy.
pub fn parse_with(input: &str, recovery: Recovery) -> Result<NetlistAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?.with_recovery(recovery);
    parser.parse()
}

/// Parse a circuit description file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path, recovery: Recovery) -> Result<NetlistAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::ImpedorError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_with(&content, recovery)
}
