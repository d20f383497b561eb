//! Primitive circuit components.
//!
//! A [`Component`] is a leaf of the element tree: one resistor, capacitor or
//! inductor with its magnitude. The [`Impedance`] trait is the capability
//! shared by leaves and groups.

mod linear;

pub use linear::{angular_frequency, capacitor, inductor, resistor};

use std::fmt;

use num_complex::Complex64;

use crate::dsl::{ComponentDef, ComponentKind};

/// The zero impedance, used as the fallback for unrecognized elements.
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Number of spaces added per nesting level in [`Impedance::describe`].
pub const INDENT_STEP: usize = 2;

/// Trait implemented by every element of the circuit tree.
pub trait Impedance {
    /// Complex impedance in ohms at `frequency` (Hz).
    fn impedance(&self, frequency: f64) -> Complex64;

    /// Write an indented, human readable description of the element.
    fn describe(&self, indent: usize, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// A primitive component.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Ohms, farads or henries depending on `kind`
    pub magnitude: f64,
}

impl Component {
    /// Create a new component.
    pub fn new(kind: ComponentKind, magnitude: f64) -> Self {
        Self { kind, magnitude }
    }

    /// Create a resistor of `ohms`.
    pub fn resistor(ohms: f64) -> Self {
        Self::new(ComponentKind::Resistor, ohms)
    }

    /// Create a capacitor of `farads`.
    pub fn capacitor(farads: f64) -> Self {
        Self::new(ComponentKind::Capacitor, farads)
    }

    /// Create an inductor of `henries`.
    pub fn inductor(henries: f64) -> Self {
        Self::new(ComponentKind::Inductor, henries)
    }

    /// Create a component from a parsed definition.
    pub fn from_def(def: &ComponentDef) -> Self {
        Self::new(def.kind.clone(), def.magnitude)
    }
}

impl Impedance for Component {
    fn impedance(&self, frequency: f64) -> Complex64 {
        match self.kind {
            ComponentKind::Resistor => resistor(self.magnitude),
            ComponentKind::Capacitor => capacitor(self.magnitude, frequency),
            ComponentKind::Inductor => inductor(self.magnitude, frequency),
            ComponentKind::Unrecognized(_) => ZERO,
        }
    }

    fn describe(&self, indent: usize, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{:indent$}{} ({}", "", self.kind, self.magnitude, indent = indent)?;
        match self.kind.unit() {
            Some(unit) => writeln!(out, " {})", unit),
            None => writeln!(out, ")"),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(0, f)
    }
}
