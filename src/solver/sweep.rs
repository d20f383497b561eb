//! Frequency sweeps.

use num_complex::Complex64;

use super::evaluator::{Analysis, Evaluator};
use crate::components::Impedance;
use crate::error::{ImpedorError, Result};

/// Spacing of the sweep points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Evenly spaced in Hz
    Linear,
    /// Evenly spaced in decades
    #[default]
    Logarithmic,
}

/// A frequency sweep request.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// First frequency in Hz
    pub start: f64,
    /// Last frequency in Hz
    pub stop: f64,
    /// Number of points, endpoints included
    pub points: usize,
    pub spacing: Spacing,
}

impl Sweep {
    /// Create a logarithmic sweep.
    pub fn new(start: f64, stop: f64, points: usize) -> Self {
        Self {
            start,
            stop,
            points,
            spacing: Spacing::default(),
        }
    }

    /// Set the point spacing.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// The frequencies of this sweep.
    pub fn frequencies(&self) -> Result<Vec<f64>> {
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(ImpedorError::InvalidSweep {
                message: "sweep bounds must be finite".to_string(),
            });
        }
        match self.spacing {
            Spacing::Linear => Ok(linspace(self.start, self.stop, self.points)),
            Spacing::Logarithmic => logspace(self.start, self.stop, self.points),
        }
    }

    /// Evaluate `element` at every sweep frequency.
    pub fn run<E: Impedance + ?Sized>(
        &self,
        evaluator: &Evaluator,
        element: &E,
        voltage: Complex64,
    ) -> Result<Vec<Analysis>> {
        self.frequencies()?
            .into_iter()
            .map(|f| evaluator.evaluate_at(element, f, voltage))
            .collect()
    }
}

/// Generates `n` linearly spaced samples in [start, stop].
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as f64 - 1.0);
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop`.
pub fn logspace(start: f64, stop: f64, n: usize) -> Result<Vec<f64>> {
    if start <= 0.0 || stop <= 0.0 {
        return Err(ImpedorError::InvalidSweep {
            message: format!(
                "logarithmic sweep needs positive bounds, got {} to {}",
                start, stop
            ),
        });
    }
    Ok(linspace(start.log10(), stop.log10(), n)
        .into_iter()
        .map(|exponent| 10f64.powf(exponent))
        .collect())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuit::Group;
    use crate::components::Component;
    use crate::solver::EvaluatorConfig;

    #[test]
    fn test_linspace_endpoints() {
        let points = linspace(10.0, 50.0, 5);
        assert_eq!(points, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_logspace_decades() {
        let points = logspace(10.0, 10_000.0, 4).unwrap();
        let expected = [10.0, 100.0, 1000.0, 10_000.0];
        for (p, e) in points.iter().zip(expected) {
            assert_relative_eq!(*p, e, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_logspace_rejects_non_positive() {
        assert!(matches!(
            logspace(0.0, 100.0, 3),
            Err(ImpedorError::InvalidSweep { .. })
        ));
    }

    #[test]
    fn test_sweep_tracks_inductive_reactance() {
        let circuit = Group::series()
            .with(Component::resistor(10.0))
            .with(Component::inductor(1e-3));
        let sweep = Sweep::new(100.0, 10_000.0, 3);
        let results = sweep
            .run(&Evaluator::default(), &circuit, Complex64::new(1.0, 0.0))
            .unwrap();

        assert_eq!(results.len(), 3);
        for window in results.windows(2) {
            assert!(window[1].impedance.im > window[0].impedance.im);
            assert!(window[1].current_magnitude() < window[0].current_magnitude());
        }
        for analysis in &results {
            assert_relative_eq!(analysis.impedance.re, 10.0);
        }
    }

    #[test]
    fn test_sweep_stops_on_degenerate_point() {
        let circuit = Group::series().with(Component::capacitor(1e-6));
        let sweep = Sweep::new(0.0, 100.0, 3).with_spacing(Spacing::Linear);
        let evaluator = Evaluator::new(EvaluatorConfig::default());
        assert!(sweep.run(&evaluator, &circuit, Complex64::new(1.0, 0.0)).is_err());
    }
}
