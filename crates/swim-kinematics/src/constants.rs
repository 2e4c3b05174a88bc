//! Reference constants for carangiform kinematics
//!
//! Values follow Borazjani & Sotiropoulos' mackerel-like swimmer, with the body
//! length normalized to 1.

use std::f64::consts::TAU;

/// Constant term of the amplitude envelope (head excursion)
pub const A0: f64 = 0.02;

/// Linear term of the amplitude envelope
pub const A1: f64 = -0.08;

/// Quadratic term of the amplitude envelope
pub const A2: f64 = 0.16;

/// Wavelength of the body wave, in body lengths
pub const WAVELENGTH: f64 = 0.95;

/// Tail-beat frequency (Hz)
pub const TAIL_BEAT_FREQUENCY: f64 = 0.3 / 0.02;

/// Wave number k = 2π/λ
pub const WAVE_NUMBER: f64 = TAU / WAVELENGTH;

/// Angular frequency ω = 2πf
pub const ANGULAR_FREQUENCY: f64 = TAU * TAIL_BEAT_FREQUENCY;

/// Normalized body length
pub const BODY_LENGTH: f64 = 1.0;

/// Default number of axial samples
pub const SAMPLE_COUNT: usize = 100;
