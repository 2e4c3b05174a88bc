//! Sampled centerline geometry
//!
//! Independent of the slope-based estimate in [`crate::arclength`]: the body is
//! sampled as a polyline and its chord lengths summed.

use glam::DVec2;

use crate::error::{ensure_finite, Result};
use crate::field::KinematicField;
use crate::grid::SampleGrid;

/// Points (z_j, h(z_j, t)) for j = 0..=N, head to tail
pub fn centerline<F: KinematicField>(
    field: &F,
    sample_count: usize,
    body_length: f64,
    t: f64,
) -> Result<Vec<DVec2>> {
    let grid = SampleGrid::new(sample_count, body_length)?;
    let t = ensure_finite("time", t)?;

    let points: Vec<DVec2> = (0..=grid.count())
        .map(|j| {
            let z = grid.position(j);
            DVec2::new(z, field.displacement(z, t))
        })
        .collect();

    log::debug!("centerline: {} points at t={}", points.len(), t);
    Ok(points)
}

/// Sum of segment lengths of a polyline
pub fn chord_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
