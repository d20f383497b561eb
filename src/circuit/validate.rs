//! Circuit validation.

use crate::components::Component;
use crate::error::{ImpedorError, Result};

use super::{Circuit, CircuitElement, Group};

/// Validate a circuit for evaluation.
///
/// Checks:
/// - The operating frequency is positive and finite
/// - Every group is series or parallel
/// - Every component is a resistor, capacitor or inductor
/// - Every magnitude is non-negative and finite
///
/// Connectivity is not checked; any tree is a valid topology.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    validate_frequency(circuit.frequency)?;
    validate_group(&circuit.root)
}

/// Check that an operating frequency is usable.
pub fn validate_frequency(frequency: f64) -> Result<()> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(())
    } else {
        Err(ImpedorError::InvalidFrequency { frequency })
    }
}

fn validate_group(group: &Group) -> Result<()> {
    if !group.configuration.is_recognized() {
        return Err(ImpedorError::InvalidConfiguration {
            configuration: group.configuration.to_string(),
        });
    }

    for child in &group.children {
        match child {
            CircuitElement::Component(c) => validate_component(c)?,
            CircuitElement::Group(g) => validate_group(g)?,
        }
    }

    Ok(())
}

fn validate_component(component: &Component) -> Result<()> {
    if !component.kind.is_recognized() {
        return Err(ImpedorError::InvalidComponentKind {
            kind: component.kind.to_string(),
        });
    }

    if !component.magnitude.is_finite() || component.magnitude < 0.0 {
        return Err(ImpedorError::InvalidMagnitude {
            kind: component.kind.to_string(),
            magnitude: component.magnitude,
        });
    }

    Ok(())
}
