//! Impedance and source current evaluation.

use log::{debug, info};
use num_complex::Complex64;

use crate::circuit::{validate_frequency, Circuit};
use crate::components::{Impedance, ZERO};
use crate::error::{ImpedorError, Result};

/// Configuration for the evaluator.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Reject non-positive frequencies and a zero or non-finite total
    /// impedance instead of letting infinities and NaNs through.
    pub reject_degenerate: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            reject_degenerate: true,
        }
    }
}

impl EvaluatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that reports whatever the arithmetic produces.
    pub fn lenient() -> Self {
        Self::new().with_reject_degenerate(false)
    }

    /// Set whether degenerate operating points are errors.
    pub fn with_reject_degenerate(mut self, reject: bool) -> Self {
        self.reject_degenerate = reject;
        self
    }
}

/// Result of evaluating a circuit at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    /// Frequency in Hz
    pub frequency: f64,
    /// Source voltage
    pub voltage: Complex64,
    /// Total impedance seen by the source
    pub impedance: Complex64,
    /// Source current
    pub current: Complex64,
}

impl Analysis {
    /// Magnitude of the source current in amperes.
    pub fn current_magnitude(&self) -> f64 {
        self.current.norm()
    }

    /// Magnitude of the total impedance in ohms.
    pub fn impedance_magnitude(&self) -> f64 {
        self.impedance.norm()
    }
}

/// Evaluates element trees at an operating point.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Create an evaluator with the given configuration.
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Evaluate a circuit at its own frequency and voltage.
    pub fn evaluate(&self, circuit: &Circuit) -> Result<Analysis> {
        self.evaluate_at(&circuit.root, circuit.frequency, Complex64::new(circuit.voltage, 0.0))
    }

    /// Evaluate any element at `frequency` driven by `voltage`.
    pub fn evaluate_at<E: Impedance + ?Sized>(
        &self,
        element: &E,
        frequency: f64,
        voltage: Complex64,
    ) -> Result<Analysis> {
        if self.config.reject_degenerate {
            validate_frequency(frequency)?;
        }

        let impedance = element.impedance(frequency);
        debug!("total impedance at {} Hz: {}", frequency, impedance);

        if self.config.reject_degenerate {
            if impedance == ZERO {
                return Err(ImpedorError::degenerate(
                    frequency,
                    "total impedance is zero, source current is unbounded",
                ));
            }
            if !impedance.is_finite() {
                return Err(ImpedorError::degenerate(
                    frequency,
                    format!("total impedance {} is not finite", impedance),
                ));
            }
        }

        let current = voltage / impedance;
        info!(
            "{} Hz: |Z| = {:.6} ohms, |I| = {:.6} A",
            frequency,
            impedance.norm(),
            current.norm()
        );

        Ok(Analysis {
            frequency,
            voltage,
            impedance,
            current,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuit::Group;
    use crate::components::Component;

    #[test]
    fn test_current_through_resistor() {
        let circuit = Circuit::new(60.0, 10.0, Group::series().with(Component::resistor(5.0)));
        let analysis = Evaluator::default().evaluate(&circuit).unwrap();
        assert_relative_eq!(analysis.impedance.re, 5.0);
        assert_relative_eq!(analysis.current_magnitude(), 2.0);
    }

    #[test]
    fn test_lone_capacitor_scenario() {
        let circuit = Circuit::new(60.0, 1.0, Group::series().with(Component::capacitor(100e-6)));
        let analysis = Evaluator::default().evaluate(&circuit).unwrap();
        assert_relative_eq!(analysis.impedance.re, 0.0);
        assert_relative_eq!(analysis.impedance.im, -26.526, epsilon = 1e-2);
        assert_relative_eq!(analysis.impedance_magnitude(), 26.526, epsilon = 1e-2);
    }

    #[test]
    fn test_rejects_zero_impedance() {
        let circuit = Circuit::new(60.0, 10.0, Group::series());
        assert!(matches!(
            Evaluator::default().evaluate(&circuit),
            Err(ImpedorError::DegenerateImpedance { .. })
        ));
    }

    #[test]
    fn test_rejects_infinite_impedance() {
        // A zero farad capacitor is an open circuit: -j/(ω·0) is -inf.
        let circuit = Circuit::new(60.0, 10.0, Group::series().with(Component::capacitor(0.0)));
        assert!(crate::circuit::validate_circuit(&circuit).is_ok());
        match Evaluator::default().evaluate(&circuit) {
            Err(ImpedorError::DegenerateImpedance { frequency, message }) => {
                assert_eq!(frequency, 60.0);
                assert!(message.contains("not finite"));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_frequency() {
        let circuit = Circuit::new(0.0, 10.0, Group::series().with(Component::capacitor(1e-6)));
        assert!(matches!(
            Evaluator::default().evaluate(&circuit),
            Err(ImpedorError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn test_lenient_propagates_non_finite_current() {
        let evaluator = Evaluator::new(EvaluatorConfig::lenient());
        let circuit = Circuit::new(60.0, 10.0, Group::series());
        let analysis = evaluator.evaluate(&circuit).unwrap();
        assert_eq!(analysis.impedance, ZERO);
        assert!(!analysis.current.is_finite());

        let dc = Circuit::new(0.0, 10.0, Group::series().with(Component::capacitor(1e-6)));
        let analysis = evaluator.evaluate(&dc).unwrap();
        assert!(analysis.impedance.im.is_infinite());
        assert!(!analysis.current.is_finite());
    }

    #[test]
    fn test_evaluate_single_component() {
        let analysis = Evaluator::default()
            .evaluate_at(&Component::inductor(1.0), 50.0, Complex64::new(230.0, 0.0))
            .unwrap();
        assert_relative_eq!(analysis.impedance.im, 2.0 * std::f64::consts::PI * 50.0);
    }
}
