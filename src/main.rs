//! Impedor - series/parallel circuit impedance calculator
//!
//! Reads a circuit description and prints its total impedance and source
//! current.
//!
//! # Usage
//!
//! ```bash
//! impedor circuit.txt
//! echo "60 10 series 1 c resistor 5" | impedor --breakdown
//! impedor circuit.txt --sweep 10 100k --points 25
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use impedor_core::{
    circuit::{validate_circuit, Circuit},
    dsl::{self, NetlistAst},
    error::{ImpedorError, Result},
    report,
    solver::{breakdown, Spacing, Sweep, DEFAULT_SWEEP_POINTS},
    Evaluator, Strictness,
};
use num_complex::Complex64;

/// Series/parallel circuit impedance calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Circuit description file; reads stdin when omitted or '-'
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: Option<PathBuf>,

    /// Re-read malformed entries and report degenerate results as-is
    #[arg(long)]
    lenient: bool,

    /// Also evaluate across a frequency range (Hz)
    #[arg(long, num_args = 2, value_names = ["START", "STOP"], value_parser = parse_frequency)]
    sweep: Option<Vec<f64>>,

    /// Number of sweep points
    #[arg(long, default_value_t = DEFAULT_SWEEP_POINTS)]
    points: usize,

    /// Space sweep points linearly instead of per decade
    #[arg(long)]
    linear: bool,

    /// Print voltage and current of every element
    #[arg(long)]
    breakdown: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_frequency(text: &str) -> std::result::Result<f64, String> {
    dsl::parse_value(text).ok_or_else(|| format!("invalid frequency '{}'", text))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn read_ast(args: &Args, strictness: Strictness) -> Result<NetlistAst> {
    match args.circuit_file.as_deref() {
        Some(path) if path.as_os_str() != "-" => dsl::parse_file(path, strictness.recovery()),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| ImpedorError::InputError {
                    message: e.to_string(),
                })?;
            dsl::parse_with(&content, strictness.recovery())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let strictness = if args.lenient {
        Strictness::Lenient
    } else {
        Strictness::Strict
    };

    // Parse the circuit description
    let ast = read_ast(&args, strictness)?;

    // Build the element tree
    let circuit = Circuit::from_ast(ast);

    // Validate
    if strictness == Strictness::Strict {
        validate_circuit(&circuit)?;
    }

    let evaluator = Evaluator::new(strictness.evaluator_config());
    let analysis = evaluator.evaluate(&circuit)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_summary(&mut out, &circuit, &analysis)?;

    if args.breakdown {
        let reports = breakdown(&circuit.root, circuit.frequency, analysis.voltage);
        writeln!(out).map_err(ImpedorError::output)?;
        report::write_breakdown(&mut out, &reports)?;
    }

    if let Some(bounds) = &args.sweep {
        let spacing = if args.linear {
            Spacing::Linear
        } else {
            Spacing::Logarithmic
        };
        let sweep = Sweep::new(bounds[0], bounds[1], args.points).with_spacing(spacing);
        let results = sweep.run(&evaluator, &circuit.root, Complex64::new(circuit.voltage, 0.0))?;
        writeln!(out).map_err(ImpedorError::output)?;
        report::write_sweep(&mut out, &results)?;
    }

    Ok(())
}
