//! Error types for the impedance evaluator.
//!
//! This module provides a unified error type [`ImpedorError`] that covers
//! all error conditions that can occur while reading a circuit description,
//! validating the element tree, and evaluating it.

use thiserror::Error;

/// Result type alias using [`ImpedorError`].
pub type Result<T> = std::result::Result<T, ImpedorError>;

/// Unified error type for all impedor operations.
#[derive(Error, Debug)]
pub enum ImpedorError {
    // ============ Input Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Slot discriminator was neither a component nor a group marker
    #[error("Invalid element choice '{found}' at line {line} (expected 'c' or 'g')")]
    InvalidDiscriminator { found: String, line: usize },

    /// Leaf kind keyword not recognized by the parser
    #[error("Unknown component type '{kind}' at line {line} (expected resistor, capacitor or inductor)")]
    UnknownComponentKind { kind: String, line: usize },

    // ============ Circuit Validation Errors ============
    /// Leaf component of an unrecognized kind
    #[error("Invalid component kind '{kind}'")]
    InvalidComponentKind { kind: String },

    /// Group with an unrecognized configuration tag
    #[error("Invalid group configuration '{configuration}' (expected series or parallel)")]
    InvalidConfiguration { configuration: String },

    /// Negative or non-finite component magnitude
    #[error("Invalid magnitude {magnitude} for {kind}")]
    InvalidMagnitude { kind: String, magnitude: f64 },

    /// Operating frequency that is not strictly positive and finite
    #[error("Invalid operating frequency {frequency} Hz - must be positive and finite")]
    InvalidFrequency { frequency: f64 },

    // ============ Evaluation Errors ============
    /// Total impedance is zero or not finite, so the source current is undefined
    #[error("Degenerate impedance at {frequency} Hz: {message}")]
    DegenerateImpedance { frequency: f64, message: String },

    /// Invalid frequency sweep request
    #[error("Invalid sweep: {message}")]
    InvalidSweep { message: String },

    // ============ I/O Errors ============
    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading the circuit from standard input
    #[error("Input error: {message}")]
    InputError { message: String },

    /// Error writing the report
    #[error("Output error: {message}")]
    OutputError { message: String },
}

impl ImpedorError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a degenerate impedance error
    pub fn degenerate(frequency: f64, message: impl Into<String>) -> Self {
        Self::DegenerateImpedance {
            frequency,
            message: message.into(),
        }
    }

    /// Create an output error from an I/O failure
    pub fn output(err: std::io::Error) -> Self {
        Self::OutputError {
            message: err.to_string(),
        }
    }
}
