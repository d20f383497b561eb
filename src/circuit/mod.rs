//! Circuit tree representation and validation.
//!
//! This module provides the internal representation of a circuit after parsing.
//! The [`Circuit`] struct holds the operating point and a [`Group`] whose
//! children are components or further groups, each owned by exactly one parent.

mod group;
mod tree;
mod validate;

pub use group::{CircuitElement, Group};
pub use tree::{count_elements, depth, Circuit};
pub use validate::{validate_circuit, validate_frequency};
