//! Lateral displacement fields of the body centerline
//!
//! A field maps axial position `z` (0 at the head) and time `t` to the lateral
//! excursion `h(z, t)` of the centerline.

use std::f64::consts::TAU;

use crate::error::Result;
use crate::params::KinematicParams;

/// Time step used by the default central-difference lateral velocity
const VELOCITY_TIME_STEP: f64 = 1e-6;

/// Capability to evaluate a displacement field and its axial slope
pub trait KinematicField {
    /// Lateral displacement h(z, t)
    fn displacement(&self, z: f64, t: f64) -> f64;

    /// Axial slope ∂h/∂z at (z, t)
    fn slope(&self, z: f64, t: f64) -> f64;

    /// Lateral velocity ∂h/∂t at (z, t)
    fn lateral_velocity(&self, z: f64, t: f64) -> f64 {
        let dt = VELOCITY_TIME_STEP;
        (self.displacement(z, t + dt) - self.displacement(z, t - dt)) / (2.0 * dt)
    }
}

/// Traveling wave with a quadratic amplitude envelope
/// h(z, t) = a(z) · sin(k·z − ω·t)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarangiformWave {
    params: KinematicParams,
}

impl CarangiformWave {
    pub fn new(params: KinematicParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &KinematicParams {
        &self.params
    }

    /// Amplitude envelope a(z) = a0 + a1·z + a2·z²
    pub fn amplitude(&self, z: f64) -> f64 {
        let [a0, a1, a2] = self.params.envelope;
        a2.mul_add(z, a1).mul_add(z, a0)
    }

    /// Envelope slope a'(z) = a1 + 2·a2·z
    pub fn amplitude_slope(&self, z: f64) -> f64 {
        let [_, a1, a2] = self.params.envelope;
        (2.0 * a2).mul_add(z, a1)
    }

    /// Phase k·z − ω·t
    pub fn phase(&self, z: f64, t: f64) -> f64 {
        self.params.wave_number * z - self.params.angular_frequency * t
    }

    /// Oscillation period 2π/ω, infinite for a frozen wave
    pub fn period(&self) -> f64 {
        TAU / self.params.angular_frequency
    }

    /// Body wavelength 2π/k
    pub fn wavelength(&self) -> f64 {
        TAU / self.params.wave_number
    }

    /// Envelope at the tail of a unit-length body
    pub fn tail_amplitude(&self) -> f64 {
        self.amplitude(1.0)
    }
}

impl KinematicField for CarangiformWave {
    fn displacement(&self, z: f64, t: f64) -> f64 {
        self.amplitude(z) * self.phase(z, t).sin()
    }

    fn slope(&self, z: f64, t: f64) -> f64 {
        let (sin, cos) = self.phase(z, t).sin_cos();
        self.amplitude_slope(z) * sin + self.amplitude(z) * self.params.wave_number * cos
    }

    fn lateral_velocity(&self, z: f64, t: f64) -> f64 {
        -self.amplitude(z) * self.params.angular_frequency * self.phase(z, t).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Field without an analytic velocity, to exercise the default
    struct StandingWave;

    impl KinematicField for StandingWave {
        fn displacement(&self, z: f64, t: f64) -> f64 {
            z.sin() * t.cos()
        }

        fn slope(&self, z: f64, t: f64) -> f64 {
            z.cos() * t.cos()
        }
    }

    #[test]
    fn test_envelope() {
        let wave = CarangiformWave::default();
        assert!((wave.amplitude(0.0) - 0.02).abs() < 1e-15);
        assert!((wave.amplitude(0.25) - 0.01).abs() < 1e-15); // envelope minimum
        assert!((wave.amplitude_slope(0.25)).abs() < 1e-15);
        assert!((wave.tail_amplitude() - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_default_uses_reference_params() {
        let wave = CarangiformWave::default();
        assert_eq!(wave.params(), &KinematicParams::default());
        assert_eq!(wave, CarangiformWave::new(KinematicParams::carangiform()).unwrap());
    }

    #[test]
    fn test_period_and_wavelength() {
        let wave = CarangiformWave::default();
        assert!((wave.period() - 1.0 / 15.0).abs() < 1e-12);
        assert!((wave.wavelength() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_displacement_is_periodic() {
        let wave = CarangiformWave::default();
        let period = wave.period();
        for i in 0..=10 {
            let z = i as f64 / 10.0;
            let h0 = wave.displacement(z, 0.3);
            let h1 = wave.displacement(z, 0.3 + period);
            assert!((h0 - h1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_slope_matches_finite_difference() {
        let wave = CarangiformWave::default();
        let dz = 1e-6;
        for i in 0..=20 {
            let z = i as f64 / 20.0;
            let t = 0.0137 * i as f64;
            let numeric = (wave.displacement(z + dz, t) - wave.displacement(z - dz, t)) / (2.0 * dz);
            assert!((wave.slope(z, t) - numeric).abs() < 1e-6);
        }
    }

    #[test]
    fn test_lateral_velocity_matches_default() {
        let wave = CarangiformWave::default();
        for i in 0..=10 {
            let z = i as f64 / 10.0;
            let analytic = wave.lateral_velocity(z, 0.01);
            let dt = 1e-6;
            let numeric =
                (wave.displacement(z, 0.01 + dt) - wave.displacement(z, 0.01 - dt)) / (2.0 * dt);
            assert!((analytic - numeric).abs() < 1e-4);
        }

        let standing = StandingWave;
        let expected = -(0.5_f64).sin() * (0.7_f64).sin();
        assert!((standing.lateral_velocity(0.5, 0.7) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_flat_field_is_zero() {
        let wave = CarangiformWave::new(KinematicParams::flat()).unwrap();
        assert_eq!(wave.displacement(0.4, 1.2), 0.0);
        assert_eq!(wave.slope(0.4, 1.2), 0.0);
    }

    #[test]
    fn test_new_rejects_invalid_params() {
        let params = KinematicParams {
            wave_number: -1.0,
            ..KinematicParams::default()
        };
        assert!(CarangiformWave::new(params).is_err());
    }
}
