//! Circuit evaluation.
//!
//! The tree is evaluated bottom-up in a single read-only pass:
//!
//! ```text
//! Z_series   = Z_1 + Z_2 + ... + Z_n
//! Z_parallel = 1 / (1/Z_1 + 1/Z_2 + ... + 1/Z_n)
//! I          = V / Z_total
//! ```
//!
//! On top of the single operating point the module offers frequency sweeps
//! and a per-element breakdown of voltages and currents.

mod breakdown;
mod evaluator;
mod sweep;

pub use breakdown::{breakdown, BranchReport};
pub use evaluator::{Analysis, Evaluator, EvaluatorConfig};
pub use sweep::{linspace, logspace, Spacing, Sweep};

/// Default number of points in a frequency sweep.
pub const DEFAULT_SWEEP_POINTS: usize = 10;
