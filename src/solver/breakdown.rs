//! Distribution of the source voltage and current over the tree.
//!
//! The root sees the full source voltage. Children of a series group carry
//! the group current and drop `I * Z` each; children of a parallel group see
//! the group voltage and draw `V / Z` each.

use num_complex::Complex64;

use crate::circuit::{CircuitElement, Group};
use crate::components::Impedance;
use crate::dsl::Configuration;

/// Voltage and current of one element of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchReport {
    /// Nesting level; the root group is 0
    pub depth: usize,
    /// Description of the element, e.g. `resistor (10 ohms)`
    pub label: String,
    pub impedance: Complex64,
    /// Voltage across the element
    pub voltage: Complex64,
    /// Current through the element
    pub current: Complex64,
}

/// Walk `root` driven by `voltage` and report every element in pre-order.
///
/// Zero-impedance branches of a parallel group get an unbounded current,
/// following the floating point result of `V / 0`. Children of unrecognized
/// groups are reported with the group's voltage and current unchanged.
pub fn breakdown(root: &Group, frequency: f64, voltage: Complex64) -> Vec<BranchReport> {
    let impedance = root.impedance(frequency);
    let current = voltage / impedance;

    let mut reports = vec![BranchReport {
        depth: 0,
        label: format!("{} group", root.configuration),
        impedance,
        voltage,
        current,
    }];
    distribute(root, frequency, voltage, current, 1, &mut reports);
    reports
}

fn distribute(
    group: &Group,
    frequency: f64,
    voltage: Complex64,
    current: Complex64,
    depth: usize,
    reports: &mut Vec<BranchReport>,
) {
    for child in &group.children {
        let impedance = child.impedance(frequency);
        let (v, i) = match group.configuration {
            Configuration::Series => (current * impedance, current),
            Configuration::Parallel => (voltage, voltage / impedance),
            Configuration::Unrecognized(_) => (voltage, current),
        };

        reports.push(BranchReport {
            depth,
            label: child.label(),
            impedance,
            voltage: v,
            current: i,
        });

        if let CircuitElement::Group(g) = child {
            distribute(g, frequency, v, i, depth + 1, reports);
        }
    }
}
