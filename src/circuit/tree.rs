//! Complete circuit: operating point plus the element tree.

use std::fmt;

use log::debug;
use num_complex::Complex64;

use super::group::{CircuitElement, Group};
use crate::components::Impedance;
use crate::dsl::NetlistAst;

/// A circuit ready for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Operating frequency in Hz
    pub frequency: f64,
    /// Source voltage in volts
    pub voltage: f64,
    /// Outermost group
    pub root: Group,
}

impl Circuit {
    /// Create a circuit from its parts.
    pub fn new(frequency: f64, voltage: f64, root: Group) -> Self {
        Self {
            frequency,
            voltage,
            root,
        }
    }

    /// Build a circuit from a parsed description.
    pub fn from_ast(ast: NetlistAst) -> Self {
        let root = Group::from_def(&ast.root);
        debug!(
            "built circuit: {} element(s), depth {}",
            count_elements(&root),
            depth(&root)
        );
        Self::new(ast.frequency, ast.voltage, root)
    }

    /// Total impedance at the circuit's operating frequency.
    pub fn impedance(&self) -> Complex64 {
        self.root.impedance(self.frequency)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.describe(0, f)
    }
}

/// Number of elements below `group`, nested groups included.
pub fn count_elements(group: &Group) -> usize {
    group
        .children
        .iter()
        .map(|child| match child {
            CircuitElement::Component(_) => 1,
            CircuitElement::Group(g) => 1 + count_elements(g),
        })
        .sum()
}

/// Nesting depth of `group`; a group without nested groups has depth 1.
pub fn depth(group: &Group) -> usize {
    1 + group
        .children
        .iter()
        .filter_map(|child| match child {
            CircuitElement::Group(g) => Some(depth(g)),
            CircuitElement::Component(_) => None,
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Component;
    use crate::dsl;

    #[test]
    fn test_from_ast_reflects_input() {
        let input = "60 10 series 2 c resistor 10 g parallel 2 c resistor 20 c inductor 2";
        let circuit = Circuit::from_ast(dsl::parse(input).unwrap());

        let expected = Group::series().with(Component::resistor(10.0)).with(
            Group::parallel()
                .with(Component::resistor(20.0))
                .with(Component::inductor(2.0)),
        );
        assert_eq!(circuit.frequency, 60.0);
        assert_eq!(circuit.voltage, 10.0);
        assert_eq!(circuit.root, expected);
    }

    #[test]
    fn test_describe_round_trip() {
        let input = "\
            1000 5
            parallel 3
              c capacitor 0.001
              g series 1
                c inductor 0.5
              c resistor 75
        ";
        let circuit = Circuit::from_ast(dsl::parse(input).unwrap());
        let expected = "\
Configuration: parallel
  capacitor (0.001 F)
  Configuration: series
    inductor (0.5 H)
  resistor (75 ohms)
";
        assert_eq!(circuit.to_string(), expected);
    }

    #[test]
    fn test_count_and_depth() {
        let root = Group::series()
            .with(Component::resistor(1.0))
            .with(Group::parallel().with(Group::series().with(Component::resistor(1.0))));
        assert_eq!(count_elements(&root), 4);
        assert_eq!(depth(&root), 3);
        assert_eq!(depth(&Group::series()), 1);
    }
}
