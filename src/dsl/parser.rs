//! Parser for circuit descriptions.

use log::{debug, warn};

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::error::{ImpedorError, Result};

/// What the parser does with a slot whose discriminator or component kind
/// is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Return the error to the caller.
    #[default]
    Abort,
    /// Drop the offending fields, record a [`Diagnostic`] and read the same
    /// slot again from the following tokens.
    Retry,
}

/// Parser for circuit descriptions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    recovery: Recovery,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            recovery: Recovery::default(),
            diagnostics: Vec::new(),
        })
    }

    /// Set the recovery policy for malformed slots.
    pub fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }

    /// Parse the entire circuit description.
    pub fn parse(&mut self) -> Result<NetlistAst> {
        let frequency = self.expect_number("operating frequency")?;
        let voltage = self.expect_number("source voltage")?;
        let root = self.parse_group()?;

        if self.current.kind != TokenKind::Eof {
            return Err(ImpedorError::parse(
                self.current.line,
                format!("unexpected trailing input '{}'", self.current.text),
            ));
        }

        Ok(NetlistAst {
            frequency,
            voltage,
            root,
            diagnostics: std::mem::take(&mut self.diagnostics),
        })
    }

    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.current.kind == kind {
            self.advance()
        } else if self.current.kind == TokenKind::Eof {
            Err(ImpedorError::parse(
                self.current.line,
                format!("unexpected end of input, expected {}", what),
            ))
        } else {
            Err(ImpedorError::parse(
                self.current.line,
                format!("expected {}, got '{}'", what, self.current.text),
            ))
        }
    }

    /// Take the next token as a free-form field; keyword checks happen later
    /// so that numbers in keyword positions go through recovery too.
    fn expect_field(&mut self, what: &str) -> Result<Token> {
        match self.current.kind {
            TokenKind::Word | TokenKind::Number => self.advance(),
            TokenKind::Eof => self.expect(TokenKind::Word, what),
        }
    }

    fn expect_number(&mut self, what: &str) -> Result<f64> {
        let tok = self.expect(TokenKind::Number, what)?;
        parse_value(&tok.text).ok_or_else(|| {
            ImpedorError::parse(tok.line, format!("invalid number: {}", tok.text))
        })
    }

    fn expect_count(&mut self) -> Result<usize> {
        let tok = self.expect(TokenKind::Number, "element count")?;
        tok.text.parse::<usize>().map_err(|_| {
            ImpedorError::parse(
                tok.line,
                format!("element count must be a non-negative integer, got '{}'", tok.text),
            )
        })
    }

    fn parse_group(&mut self) -> Result<GroupDef> {
        let tag = self.expect(TokenKind::Word, "group configuration")?;
        let configuration = Configuration::from_keyword(&tag.text);
        let count = self.expect_count()?;
        debug!(
            "line {}: {} group with {} element(s)",
            tag.line, configuration, count
        );

        // The count is untrusted; let the vector grow with accepted elements.
        let mut elements = Vec::new();
        while elements.len() < count {
            if let Some(element) = self.parse_element()? {
                elements.push(element);
            }
        }

        Ok(GroupDef {
            configuration,
            elements,
            line: tag.line,
        })
    }

    /// Parse one slot. `None` means the slot was rejected and must be re-read.
    fn parse_element(&mut self) -> Result<Option<ElementDef>> {
        let choice = self.expect_field("element choice ('c' or 'g')")?;

        match SlotKind::from_keyword(&choice.text) {
            Some(SlotKind::Component) => self.parse_component(),
            Some(SlotKind::Group) => Ok(Some(ElementDef::Group(self.parse_group()?))),
            None => match self.recovery {
                Recovery::Abort => Err(ImpedorError::InvalidDiscriminator {
                    found: choice.text,
                    line: choice.line,
                }),
                Recovery::Retry => {
                    self.reject(
                        &choice,
                        format!(
                            "invalid choice '{}', expected 'c' for component or 'g' for group",
                            choice.text
                        ),
                    );
                    Ok(None)
                }
            },
        }
    }

    fn parse_component(&mut self) -> Result<Option<ElementDef>> {
        let kind_tok = self.expect_field("component type")?;
        // The magnitude is consumed even when the kind is rejected.
        let magnitude = self.expect_number("component value")?;

        match ComponentKind::from_keyword(&kind_tok.text) {
            Some(kind) => Ok(Some(ElementDef::Component(ComponentDef {
                kind,
                magnitude,
                line: kind_tok.line,
            }))),
            None => match self.recovery {
                Recovery::Abort => Err(ImpedorError::UnknownComponentKind {
                    kind: kind_tok.text,
                    line: kind_tok.line,
                }),
                Recovery::Retry => {
                    self.reject(
                        &kind_tok,
                        format!(
                            "invalid component type '{}', expected resistor, capacitor or inductor",
                            kind_tok.text
                        ),
                    );
                    Ok(None)
                }
            },
        }
    }

    fn reject(&mut self, tok: &Token, message: String) {
        warn!("line {}, column {}: {}", tok.line, tok.column, message);
        self.diagnostics.push(Diagnostic {
            line: tok.line,
            column: tok.column,
            message,
        });
    }
}
