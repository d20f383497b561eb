//! WASM bindings for Impedor Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'impedor_core';
//!
//! await init();
//!
//! const circuit = new WasmCircuit(`
//!   60 10
//!   series 2
//!     c resistor 10
//!     g parallel 2
//!       c resistor 20
//!       c resistor 20
//! `);
//!
//! const [re, im] = circuit.impedance();
//! const amps = circuit.current_magnitude();
//! ```

use num_complex::Complex64;
use wasm_bindgen::prelude::*;

use crate::circuit::Circuit;
use crate::error::ImpedorError;
use crate::solver::{Analysis, Evaluator};
use crate::Strictness;

fn to_js(err: ImpedorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible circuit evaluator.
#[wasm_bindgen]
pub struct WasmCircuit {
    circuit: Circuit,
    evaluator: Evaluator,
    analysis: Analysis,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Parse, validate and evaluate a circuit description.
    ///
    /// # Arguments
    /// * `source` - The circuit description text
    ///
    /// # Returns
    /// A new `WasmCircuit` or an error message if the description is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(source: &str) -> Result<WasmCircuit, JsValue> {
        Self::with_strictness(source, false)
    }

    /// Like the constructor, with `lenient` selecting retry-on-error parsing
    /// and unchecked evaluation.
    #[wasm_bindgen]
    pub fn with_strictness(source: &str, lenient: bool) -> Result<WasmCircuit, JsValue> {
        let strictness = if lenient {
            Strictness::Lenient
        } else {
            Strictness::Strict
        };
        let circuit = crate::load_circuit(source, strictness).map_err(to_js)?;
        let evaluator = Evaluator::new(strictness.evaluator_config());
        let analysis = evaluator.evaluate(&circuit).map_err(to_js)?;

        Ok(WasmCircuit {
            circuit,
            evaluator,
            analysis,
        })
    }

    /// Total impedance as `[re, im]` in ohms.
    #[wasm_bindgen]
    pub fn impedance(&self) -> Vec<f64> {
        vec![self.analysis.impedance.re, self.analysis.impedance.im]
    }

    /// Total impedance at another frequency, as `[re, im]`.
    #[wasm_bindgen]
    pub fn impedance_at(&self, frequency: f64) -> Result<Vec<f64>, JsValue> {
        let voltage = Complex64::new(self.circuit.voltage, 0.0);
        let analysis = self
            .evaluator
            .evaluate_at(&self.circuit.root, frequency, voltage)
            .map_err(to_js)?;
        Ok(vec![analysis.impedance.re, analysis.impedance.im])
    }

    /// Magnitude of the source current in amperes.
    #[wasm_bindgen]
    pub fn current_magnitude(&self) -> f64 {
        self.analysis.current_magnitude()
    }

    /// Operating frequency in Hz.
    #[wasm_bindgen(getter)]
    pub fn frequency(&self) -> f64 {
        self.circuit.frequency
    }

    /// Indented description of the element tree.
    #[wasm_bindgen]
    pub fn describe(&self) -> String {
        self.circuit.to_string()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
