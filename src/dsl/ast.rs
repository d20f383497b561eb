//! Parse tree types for the circuit description.

use std::fmt;

/// Complete parse tree of a circuit description.
#[derive(Debug, Clone, PartialEq)]
pub struct NetlistAst {
    /// Operating frequency in Hz
    pub frequency: f64,
    /// Source voltage in volts
    pub voltage: f64,
    /// Outermost group
    pub root: GroupDef,
    /// Input slots that were rejected and re-read
    pub diagnostics: Vec<Diagnostic>,
}

/// A series or parallel group from the description.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDef {
    /// Configuration tag as read
    pub configuration: Configuration,
    /// Accepted elements, in input order
    pub elements: Vec<ElementDef>,
    /// Source line of the configuration tag
    pub line: usize,
}

/// One filled slot of a group.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementDef {
    /// Primitive component (`c`)
    Component(ComponentDef),
    /// Nested group (`g`)
    Group(GroupDef),
}

/// A primitive component definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDef {
    /// Component kind
    pub kind: ComponentKind,
    /// Resistance, capacitance or inductance, depending on kind
    pub magnitude: f64,
    /// Source line number for error reporting
    pub line: usize,
}

/// A recovered input problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line of the offending token (1-indexed)
    pub line: usize,
    /// Column of the offending token (1-indexed)
    pub column: usize,
    /// Human readable description
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.line, self.column, self.message)
    }
}

/// Primitive component kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Resistor (ohms)
    Resistor,
    /// Capacitor (farads)
    Capacitor,
    /// Inductor (henries)
    Inductor,
    /// Any other kind name; evaluates to zero impedance
    Unrecognized(String),
}

impl ComponentKind {
    /// Parse a component kind from its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "resistor" => Some(Self::Resistor),
            "capacitor" => Some(Self::Capacitor),
            "inductor" => Some(Self::Inductor),
            _ => None,
        }
    }

    /// Keyword used when describing the component.
    pub fn name(&self) -> &str {
        match self {
            Self::Resistor => "resistor",
            Self::Capacitor => "capacitor",
            Self::Inductor => "inductor",
            Self::Unrecognized(name) => name,
        }
    }

    /// Unit of the magnitude, if the kind is known.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Self::Resistor => Some("ohms"),
            Self::Capacitor => Some("F"),
            Self::Inductor => Some("H"),
            Self::Unrecognized(_) => None,
        }
    }

    /// Check whether this is one of the supported kinds.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the children of a group are connected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Configuration {
    /// Children chained end-to-end
    Series,
    /// Children sharing both terminals
    Parallel,
    /// Any other tag; evaluates to zero impedance
    Unrecognized(String),
}

impl Configuration {
    /// Parse a configuration from its keyword, keeping unknown tags.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "series" => Self::Series,
            "parallel" => Self::Parallel,
            _ => Self::Unrecognized(keyword.to_string()),
        }
    }

    /// Keyword used when describing the group.
    pub fn name(&self) -> &str {
        match self {
            Self::Series => "series",
            Self::Parallel => "parallel",
            Self::Unrecognized(name) => name,
        }
    }

    /// Check whether this is series or parallel.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Slot discriminator: does the next element describe a leaf or a group?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// `c` / `component`
    Component,
    /// `g` / `group`
    Group,
}

impl SlotKind {
    /// Parse a slot discriminator.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "c" | "component" => Some(Self::Component),
            "g" | "group" => Some(Self::Group),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(ComponentKind::from_keyword("Resistor"), Some(ComponentKind::Resistor));
        assert_eq!(ComponentKind::from_keyword("CAPACITOR"), Some(ComponentKind::Capacitor));
        assert_eq!(ComponentKind::from_keyword("diode"), None);
        assert_eq!(Configuration::from_keyword("Parallel"), Configuration::Parallel);
        assert_eq!(SlotKind::from_keyword("G"), Some(SlotKind::Group));
        assert_eq!(SlotKind::from_keyword("x"), None);
    }

    #[test]
    fn test_unknown_configuration_keeps_tag() {
        let config = Configuration::from_keyword("delta");
        assert_eq!(config, Configuration::Unrecognized("delta".to_string()));
        assert_eq!(config.name(), "delta");
        assert!(!config.is_recognized());
    }

    #[test]
    fn test_units() {
        assert_eq!(ComponentKind::Resistor.unit(), Some("ohms"));
        assert_eq!(ComponentKind::Capacitor.unit(), Some("F"));
        assert_eq!(ComponentKind::Inductor.unit(), Some("H"));
        assert_eq!(ComponentKind::Unrecognized("diode".into()).unit(), None);
    }
}
