//! Uniform axial sampling of the body

use crate::error::{ensure_positive, KinematicsError, Result};
use crate::field::KinematicField;

/// `count` equally spaced positions `i·L/count` for `i = 0..count`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleGrid {
    count: usize,
    length: f64,
}

impl SampleGrid {
    pub fn new(count: usize, length: f64) -> Result<Self> {
        if count == 0 {
            return Err(KinematicsError::non_positive_count("sample_count", count));
        }
        let length = ensure_positive("body_length", length)?;
        Ok(Self { count, length })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Spacing L/N
    pub fn step(&self) -> f64 {
        self.length / self.count as f64
    }

    /// Position of sample `index`; `index == count` gives the tail at `L`
    pub fn position(&self, index: usize) -> f64 {
        index as f64 * self.step()
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.position(i))
    }
}

/// Body shape h(z_i, t) at every grid position
pub fn displacement_profile<F: KinematicField>(field: &F, grid: &SampleGrid, t: f64) -> Vec<f64> {
    grid.positions().map(|z| field.displacement(z, t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::CarangiformWave;

    #[test]
    fn test_positions() {
        let grid = SampleGrid::new(4, 2.0).unwrap();
        assert_eq!(grid.step(), 0.5);
        let positions: Vec<f64> = grid.positions().collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(grid.position(4), 2.0);
    }

    #[test]
    fn test_rejects_invalid_arguments() {
        assert!(matches!(
            SampleGrid::new(0, 1.0),
            Err(KinematicsError::InvalidArgument { name: "sample_count", .. })
        ));
        assert!(matches!(
            SampleGrid::new(10, 0.0),
            Err(KinematicsError::InvalidArgument { name: "body_length", .. })
        ));
        assert!(SampleGrid::new(10, -1.0).is_err());
        assert!(SampleGrid::new(10, f64::NAN).is_err());
    }

    #[test]
    fn test_displacement_profile() {
        let wave = CarangiformWave::default();
        let grid = SampleGrid::new(50, 1.0).unwrap();
        let profile = displacement_profile(&wave, &grid, 0.2);
        assert_eq!(profile.len(), 50);
        for (z, h) in grid.positions().zip(&profile) {
            assert!(h.abs() <= wave.amplitude(z).abs() + 1e-15);
        }
    }
}
