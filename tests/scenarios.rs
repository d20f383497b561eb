//! End-to-end scenarios: description text in, impedance and current out.

use approx::assert_relative_eq;
use impedor_core::{
    circuit::Circuit,
    dsl::{self, Recovery},
    load_circuit, Evaluator, ImpedorError, Strictness,
};

fn evaluate(input: &str) -> impedor_core::solver::Analysis {
    let circuit = load_circuit(input, Strictness::Strict).expect("valid circuit");
    Evaluator::default().evaluate(&circuit).expect("non-degenerate circuit")
}

#[test]
fn resistor_divider_current() {
    let analysis = evaluate("60 10 series 1 c resistor 5");
    assert_relative_eq!(analysis.impedance.re, 5.0);
    assert_relative_eq!(analysis.impedance.im, 0.0);
    assert_relative_eq!(analysis.current_magnitude(), 2.0);
}

#[test]
fn nested_series_parallel_is_twenty_ohms_at_any_frequency() {
    for frequency in ["1", "60", "1k", "1M"] {
        let input = format!(
            "{} 10 series 2 c resistor 10 g parallel 2 c resistor 20 c resistor 20",
            frequency
        );
        let analysis = evaluate(&input);
        assert_relative_eq!(analysis.impedance.re, 20.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.impedance.im, 0.0, epsilon = 1e-12);
        assert_relative_eq!(analysis.current_magnitude(), 0.5, epsilon = 1e-12);
    }
}

#[test]
fn lone_capacitor_at_sixty_hertz() {
    let analysis = evaluate("60 1 series 1 c capacitor 100u");
    assert_relative_eq!(analysis.impedance.re, 0.0);
    assert_relative_eq!(analysis.impedance.im, -26.526, epsilon = 1e-2);
}

#[test]
fn parallel_short_branch_is_ignored() {
    let with_short = evaluate("50 1 parallel 3 c resistor 10 c resistor 0 c resistor 10");
    let without = evaluate("50 1 parallel 2 c resistor 10 c resistor 10");
    assert_eq!(with_short.impedance, without.impedance);
    assert_relative_eq!(with_short.impedance.re, 5.0, epsilon = 1e-12);
}

#[test]
fn series_resonance_leaves_only_resistance() {
    // f0 = 1 / (2π √(LC)) with L = 1 mH, C = 1 µF
    let f0 = 1.0 / (2.0 * std::f64::consts::PI * (1e-3f64 * 1e-6).sqrt());
    let input = format!("{} 1 series 3 c resistor 8 c inductor 1m c capacitor 1u", f0);
    let analysis = evaluate(&input);
    assert_relative_eq!(analysis.impedance.re, 8.0, epsilon = 1e-9);
    assert_relative_eq!(analysis.impedance.im, 0.0, epsilon = 1e-6);
}

#[test]
fn describe_reflects_builder_input() {
    let input = "\
        1000 12
        series 3
          c resistor 100
          g parallel 2
            c capacitor 0.000001
            g series 1
              c inductor 0.01
          c resistor 50
    ";
    let circuit = load_circuit(input, Strictness::Strict).unwrap();
    let expected = "\
Configuration: series
  resistor (100 ohms)
  Configuration: parallel
    capacitor (0.000001 F)
    Configuration: series
      inductor (0.01 H)
  resistor (50 ohms)
";
    assert_eq!(circuit.to_string(), expected);
}

#[test]
fn lenient_mode_matches_interactive_retry_behavior() {
    let input = "60 10 series 1 q c transistor 1 c resistor 5";
    assert!(load_circuit(input, Strictness::Strict).is_err());

    let ast = dsl::parse_with(input, Recovery::Retry).unwrap();
    assert_eq!(ast.diagnostics.len(), 2);

    let circuit = Circuit::from_ast(ast);
    let analysis = Evaluator::default().evaluate(&circuit).unwrap();
    assert_relative_eq!(analysis.current_magnitude(), 2.0);
}

#[test]
fn unknown_configuration_is_zero_when_lenient_and_rejected_when_strict() {
    let input = "60 10 series 2 c resistor 5 g star 1 c resistor 100";

    match load_circuit(input, Strictness::Strict) {
        Err(ImpedorError::InvalidConfiguration { configuration }) => {
            assert_eq!(configuration, "star")
        }
        other => panic!("unexpected result {:?}", other),
    }

    let circuit = load_circuit(input, Strictness::Lenient).unwrap();
    let analysis = Evaluator::new(Strictness::Lenient.evaluator_config())
        .evaluate(&circuit)
        .unwrap();
    assert_relative_eq!(analysis.impedance.re, 5.0);
}

#[test]
fn zero_total_impedance_is_reported() {
    let circuit = load_circuit("60 10 parallel 0", Strictness::Strict).unwrap();
    assert!(matches!(
        Evaluator::default().evaluate(&circuit),
        Err(ImpedorError::DegenerateImpedance { .. })
    ));
}

#[test]
fn zero_frequency_is_rejected_when_strict() {
    assert!(matches!(
        load_circuit("0 10 series 1 c capacitor 1u", Strictness::Strict),
        Err(ImpedorError::InvalidFrequency { .. })
    ));
}
