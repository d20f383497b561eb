//! Series/parallel groups and the element tree.

use std::fmt;

use num_complex::Complex64;

use crate::components::{Component, Impedance, INDENT_STEP, ZERO};
use crate::dsl::{Configuration, ElementDef, GroupDef};

/// A node of the circuit tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CircuitElement {
    Component(Component),
    Group(Group),
}

impl CircuitElement {
    /// Build an element from its parsed definition.
    pub fn from_def(def: &ElementDef) -> Self {
        match def {
            ElementDef::Component(c) => Self::Component(Component::from_def(c)),
            ElementDef::Group(g) => Self::Group(Group::from_def(g)),
        }
    }

    /// Short label used in reports.
    pub fn label(&self) -> String {
        match self {
            Self::Component(c) => match c.kind.unit() {
                Some(unit) => format!("{} ({} {})", c.kind, c.magnitude, unit),
                None => format!("{} ({})", c.kind, c.magnitude),
            },
            Self::Group(g) => format!("{} group", g.configuration),
        }
    }
}

impl Impedance for CircuitElement {
    fn impedance(&self, frequency: f64) -> Complex64 {
        match self {
            Self::Component(c) => c.impedance(frequency),
            Self::Group(g) => g.impedance(frequency),
        }
    }

    fn describe(&self, indent: usize, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Self::Component(c) => c.describe(indent, out),
            Self::Group(g) => g.describe(indent, out),
        }
    }
}

impl From<Component> for CircuitElement {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}

impl From<Group> for CircuitElement {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

/// An ordered group of exclusively owned children.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub configuration: Configuration,
    pub children: Vec<CircuitElement>,
}

impl Group {
    /// Create an empty group.
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            children: Vec::new(),
        }
    }

    /// Create an empty series group.
    pub fn series() -> Self {
        Self::new(Configuration::Series)
    }

    /// Create an empty parallel group.
    pub fn parallel() -> Self {
        Self::new(Configuration::Parallel)
    }

    /// Append a child, builder style.
    pub fn with(mut self, element: impl Into<CircuitElement>) -> Self {
        self.push(element);
        self
    }

    /// Append a child.
    pub fn push(&mut self, element: impl Into<CircuitElement>) {
        self.children.push(element.into());
    }

    /// Build a group from its parsed definition. Nested groups are built by
    /// recursing on each child definition.
    pub fn from_def(def: &GroupDef) -> Self {
        Self {
            configuration: def.configuration.clone(),
            children: def.elements.iter().map(CircuitElement::from_def).collect(),
        }
    }

    fn series_impedance(&self, frequency: f64) -> Complex64 {
        self.children
            .iter()
            .map(|child| child.impedance(frequency))
            .fold(ZERO, |acc, z| acc + z)
    }

    fn parallel_impedance(&self, frequency: f64) -> Complex64 {
        // NOTE: a zero-impedance branch is left out of the admittance sum
        // instead of shorting the whole group. Physically a short should
        // force the group to zero; kept as-is because existing results
        // depend on it.
        let admittance = self
            .children
            .iter()
            .map(|child| child.impedance(frequency))
            .filter(|z| *z != ZERO)
            .fold(ZERO, |acc, z| acc + z.inv());

        if admittance == ZERO {
            ZERO
        } else {
            admittance.inv()
        }
    }
}

impl Impedance for Group {
    fn impedance(&self, frequency: f64) -> Complex64 {
        match self.configuration {
            Configuration::Series => self.series_impedance(frequency),
            Configuration::Parallel => self.parallel_impedance(frequency),
            Configuration::Unrecognized(_) => ZERO,
        }
    }

    fn describe(&self, indent: usize, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "{:indent$}Configuration: {}",
            "",
            self.configuration,
            indent = indent
        )?;
        for child in &self.children {
            child.describe(indent + INDENT_STEP, out)?;
        }
        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(0, f)
    }
}

impl fmt::Display for CircuitElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(0, f)
    }
}
