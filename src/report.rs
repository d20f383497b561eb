//! Text reports for the command line frontend.

use std::io::Write;

use crate::circuit::Circuit;
use crate::error::{ImpedorError, Result};
use crate::solver::{Analysis, BranchReport};

/// Write the circuit layout followed by total impedance and current.
pub fn write_summary<W: Write>(out: &mut W, circuit: &Circuit, analysis: &Analysis) -> Result<()> {
    writeln!(out, "--- Circuit Configuration ---").map_err(ImpedorError::output)?;
    write!(out, "{}", circuit).map_err(ImpedorError::output)?;
    writeln!(out).map_err(ImpedorError::output)?;
    writeln!(
        out,
        "Total Impedance of the Circuit at {} Hz: ({},{}) ohms",
        analysis.frequency, analysis.impedance.re, analysis.impedance.im
    )
    .map_err(ImpedorError::output)?;
    writeln!(
        out,
        "Total Current in the Circuit: {} A (magnitude)",
        analysis.current_magnitude()
    )
    .map_err(ImpedorError::output)?;
    Ok(())
}

/// Write one row per sweep point.
pub fn write_sweep<W: Write>(out: &mut W, results: &[Analysis]) -> Result<()> {
    writeln!(out, "--- Frequency Sweep ---").map_err(ImpedorError::output)?;
    writeln!(
        out,
        "{:>14} {:>14} {:>14} {:>14} {:>14}",
        "f (Hz)", "Re Z (ohms)", "Im Z (ohms)", "|Z| (ohms)", "|I| (A)"
    )
    .map_err(ImpedorError::output)?;
    for a in results {
        writeln!(
            out,
            "{:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
            a.frequency,
            a.impedance.re,
            a.impedance.im,
            a.impedance_magnitude(),
            a.current_magnitude()
        )
        .map_err(ImpedorError::output)?;
    }
    Ok(())
}

/// Write the voltage and current of every element, indented by depth.
pub fn write_breakdown<W: Write>(out: &mut W, reports: &[BranchReport]) -> Result<()> {
    writeln!(out, "--- Branch Breakdown ---").map_err(ImpedorError::output)?;
    for r in reports {
        writeln!(
            out,
            "{:indent$}{}: |V| = {} V, |I| = {} A",
            "",
            r.label,
            r.voltage.norm(),
            r.current.norm(),
            indent = r.depth * crate::components::INDENT_STEP
        )
        .map_err(ImpedorError::output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use super::*;
    use crate::circuit::Group;
    use crate::components::Component;
    use crate::solver::{breakdown, Evaluator};

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_layout() {
        let circuit = Circuit::new(60.0, 10.0, Group::series().with(Component::resistor(5.0)));
        let analysis = Evaluator::default().evaluate(&circuit).unwrap();
        let text = render(|out| write_summary(out, &circuit, &analysis));

        let expected = "\
--- Circuit Configuration ---
Configuration: series
  resistor (5 ohms)

Total Impedance of the Circuit at 60 Hz: (5,0) ohms
Total Current in the Circuit: 2 A (magnitude)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_sweep_has_row_per_point() {
        let analysis = Evaluator::default()
            .evaluate_at(&Component::resistor(1.0), 1.0, Complex64::new(1.0, 0.0))
            .unwrap();
        let text = render(|out| write_sweep(out, &[analysis, analysis]));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_breakdown_indents_by_depth() {
        let root = Group::series().with(Component::resistor(4.0));
        let reports = breakdown(&root, 1.0, Complex64::new(8.0, 0.0));
        let text = render(|out| write_breakdown(out, &reports));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "series group: |V| = 8 V, |I| = 2 A");
        assert_eq!(lines[2], "  resistor (4 ohms): |V| = 8 V, |I| = 2 A");
    }
}
