//! # Impedor Core
//!
//! Complex impedance of series/parallel circuit trees.
//!
//! This library provides:
//! - A small text format for describing nested series and parallel groups
//! - An element tree of resistors, capacitors, inductors and groups
//! - Evaluation of total impedance and source current at a frequency
//! - Frequency sweeps and a per-element voltage/current breakdown
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Lexer and parser for circuit descriptions
//! - [`circuit`] - Element tree construction and validation
//! - [`components`] - Primitive components and their impedance formulas
//! - [`solver`] - Evaluation, sweeps and breakdowns
//! - [`report`] - Text output for the command line
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! echo "60 10 series 2 c resistor 10 g parallel 2 c resistor 20 c resistor 20" | impedor
//! ```
//!
//! ### Library
//!
//! ```
//! use impedor_core::{circuit::Circuit, dsl, Evaluator};
//!
//! let ast = dsl::parse("60 10 series 1 c resistor 5").unwrap();
//! let circuit = Circuit::from_ast(ast);
//! let analysis = Evaluator::default().evaluate(&circuit).unwrap();
//! assert_eq!(analysis.current_magnitude(), 2.0);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuit } from 'impedor_core';
//!
//! const circuit = new WasmCircuit("60 10 series 1 c resistor 5");
//! circuit.current_magnitude();
//! ```

pub mod circuit;
pub mod components;
pub mod dsl;
pub mod error;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use circuit::Circuit;
pub use components::Impedance;
pub use error::{ImpedorError, Result};
pub use solver::{Evaluator, EvaluatorConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;

use dsl::Recovery;

/// How strictly input is checked, end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Abort on malformed input, validate the tree, reject degenerate results.
    #[default]
    Strict,
    /// Re-read malformed slots, skip validation, let infinities through.
    Lenient,
}

impl Strictness {
    /// Parser recovery policy for this level.
    pub fn recovery(self) -> Recovery {
        match self {
            Self::Strict => Recovery::Abort,
            Self::Lenient => Recovery::Retry,
        }
    }

    /// Evaluator configuration for this level.
    pub fn evaluator_config(self) -> EvaluatorConfig {
        match self {
            Self::Strict => EvaluatorConfig::new(),
            Self::Lenient => EvaluatorConfig::lenient(),
        }
    }
}

/// Parse, build and (when strict) validate a circuit description.
pub fn load_circuit(input: &str, strictness: Strictness) -> Result<Circuit> {
    let ast = dsl::parse_with(input, strictness.recovery())?;
    let circuit = Circuit::from_ast(ast);
    if strictness == Strictness::Strict {
        circuit::validate_circuit(&circuit)?;
    }
    Ok(circuit)
}
