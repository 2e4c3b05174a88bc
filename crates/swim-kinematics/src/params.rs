//! Kinematic parameters for the traveling body wave

use std::f64::consts::TAU;

use crate::constants::*;
use crate::error::{ensure_finite, KinematicsError, Result};

/// Coefficients of a carangiform body wave
///
/// The amplitude envelope is `a(z) = a0 + a1·z + a2·z²` and the phase is
/// `k·z − ω·t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicParams {
    /// Envelope coefficients [a0, a1, a2]
    pub envelope: [f64; 3],
    /// Wave number k (rad per body length)
    pub wave_number: f64,
    /// Angular frequency ω (rad/s)
    pub angular_frequency: f64,
}

impl Default for KinematicParams {
    fn default() -> Self {
        Self {
            envelope: [
                A0, // head
                A1, // linear
                A2, // quadratic
            ],
            wave_number: WAVE_NUMBER,
            angular_frequency: ANGULAR_FREQUENCY,
        }
    }
}

impl KinematicParams {
    /// Create validated parameters from raw coefficients
    pub fn new(a0: f64, a1: f64, a2: f64, wave_number: f64, angular_frequency: f64) -> Result<Self> {
        let params = Self {
            envelope: [a0, a1, a2],
            wave_number,
            angular_frequency,
        };
        params.validate()?;
        Ok(params)
    }

    /// Create parameters from a wavelength (body lengths) and frequency (Hz)
    pub fn from_wavelength_and_frequency(
        a0: f64,
        a1: f64,
        a2: f64,
        wavelength: f64,
        frequency: f64,
    ) -> Result<Self> {
        if !(wavelength.is_finite() && wavelength > 0.0) {
            return Err(KinematicsError::non_positive_value("wavelength", wavelength));
        }
        Self::new(a0, a1, a2, TAU / wavelength, TAU * frequency)
    }

    /// Reference mackerel-like kinematics
    pub fn carangiform() -> Self {
        Self::default()
    }

    /// Same wave with a zero envelope: the body stays straight
    pub fn flat() -> Self {
        Self {
            envelope: [0.0; 3],
            ..Self::default()
        }
    }

    /// Copy with every envelope coefficient multiplied by `factor`
    pub fn scaled_amplitude(&self, factor: f64) -> Self {
        Self {
            envelope: self.envelope.map(|a| a * factor),
            ..*self
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in ["a0", "a1", "a2"].into_iter().zip(self.envelope) {
            ensure_finite(name, value)?;
        }
        if !(self.wave_number.is_finite() && self.wave_number > 0.0) {
            return Err(KinematicsError::non_positive_value(
                "wave_number",
                self.wave_number,
            ));
        }
        if !self.angular_frequency.is_finite() || self.angular_frequency < 0.0 {
            return Err(KinematicsError::invalid_argument(
                "angular_frequency",
                format!(
                    "must be finite and non-negative, got {}",
                    self.angular_frequency
                ),
            ));
        }
        Ok(())
    }
}
