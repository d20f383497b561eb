//! Impedance formulas for the linear passive components.

use std::f64::consts::PI;

use num_complex::Complex64;

/// Angular frequency ω = 2πf (rad/s) for a frequency in Hz.
pub fn angular_frequency(frequency: f64) -> f64 {
    2.0 * PI * frequency
}

/// Resistor impedance: purely real and frequency independent.
pub fn resistor(resistance: f64) -> Complex64 {
    Complex64::new(resistance, 0.0)
}

/// Capacitor impedance: -j / (ωC).
///
/// A zero frequency or capacitance is not trapped and yields an infinite
/// reactance.
pub fn capacitor(capacitance: f64, frequency: f64) -> Complex64 {
    Complex64::new(0.0, -1.0 / (angular_frequency(frequency) * capacitance))
}

/// Inductor impedance: jωL.
pub fn inductor(inductance: f64, frequency: f64) -> Complex64 {
    Complex64::new(0.0, angular_frequency(frequency) * inductance)
}
