//! Arclength of the undulating centerline
//!
//! The centerline at a fixed instant is the curve `z ↦ (z, h(z, t))`. Its
//! length is accumulated segment by segment from the local slope:
//!
//! ```text
//! Δs_i = sqrt(1 + (∂h/∂z(z_i, t))²) · dz
//! ```
//!
//! which is a left Riemann sum of the arclength integral over `[0, L]`.

use crate::error::{ensure_finite, KinematicsError, Result};
use crate::field::{CarangiformWave, KinematicField};
use crate::grid::SampleGrid;

/// Spread above which a period sweep is reported as poorly conserved
const CONSERVATION_WARN_SPREAD: f64 = 0.05;

/// Cumulative arclength at each grid station
///
/// Entry `j` is the length of the centerline between the head and `z_j = j·dz`,
/// so the table has `N + 1` entries starting at `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcLengthTable {
    step: f64,
    cumulative: Vec<f64>,
}

impl ArcLengthTable {
    /// Total arclength over [0, L]
    pub fn total(&self) -> f64 {
        // never empty: built with N + 1 >= 2 entries
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Axial spacing dz
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.cumulative
    }

    /// Arclength from the head to station `j`
    pub fn partial(&self, j: usize) -> Option<f64> {
        self.cumulative.get(j).copied()
    }

    /// Axial stations z_j = j·dz matching each entry
    pub fn positions(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.cumulative.len()).map(move |j| j as f64 * self.step)
    }

    /// (z_j, s_j) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions().zip(self.cumulative.iter().copied())
    }

    /// Per-segment lengths Δs_i
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.cumulative.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

/// Build the cumulative arclength table of `field` at time `t`
///
/// Fails with [`KinematicsError::InvalidArgument`] when `sample_count` is zero,
/// `body_length` is not finite and positive, or `t` is not finite.
pub fn compute_arc_length_table<F: KinematicField>(
    field: &F,
    sample_count: usize,
    body_length: f64,
    t: f64,
) -> Result<ArcLengthTable> {
    let grid = SampleGrid::new(sample_count, body_length)?;
    let t = ensure_finite("time", t)?;
    let step = grid.step();

    // Entries are (Σ s'_i / N)·L; with every s'_i >= 1 the total never rounds below L.
    let count = grid.count() as f64;
    let mut cumulative = Vec::with_capacity(grid.count() + 1);
    cumulative.push(0.0);
    let mut density_sum = 0.0;
    for z in grid.positions() {
        let slope = field.slope(z, t);
        density_sum += (1.0 + slope * slope).sqrt();
        cumulative.push(density_sum / count * body_length);
    }
    let total = density_sum / count * body_length;

    log::debug!(
        "arclength table: N={}, L={}, t={}, total={:.6}",
        sample_count,
        body_length,
        t,
        total
    );

    Ok(ArcLengthTable { step, cumulative })
}

/// Total arclength of `field` over [0, L] at time `t`
pub fn total_arc_length<F: KinematicField>(
    field: &F,
    sample_count: usize,
    body_length: f64,
    t: f64,
) -> Result<f64> {
    compute_arc_length_table(field, sample_count, body_length, t).map(|table| table.total())
}

/// Total arclength at each of `times`
pub fn arc_length_sweep<F: KinematicField>(
    field: &F,
    sample_count: usize,
    body_length: f64,
    times: &[f64],
) -> Result<Vec<f64>> {
    times
        .iter()
        .map(|&t| total_arc_length(field, sample_count, body_length, t))
        .collect()
}

/// Times `i·T/steps` for `i = 0..=steps` across one oscillation period T
pub fn period_times(wave: &CarangiformWave, steps: usize) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(KinematicsError::non_positive_count("steps", steps));
    }
    let period = wave.period();
    if !period.is_finite() {
        return Err(KinematicsError::invalid_argument(
            "angular_frequency",
            "a frozen wave has no period",
        ));
    }
    let dt = period / steps as f64;
    Ok((0..=steps).map(|i| i as f64 * dt).collect())
}

/// Total arclength sampled across one full period of `wave`
///
/// Returns the sample times alongside the totals.
pub fn period_sweep(
    wave: &CarangiformWave,
    sample_count: usize,
    body_length: f64,
    steps: usize,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let times = period_times(wave, steps)?;
    let totals = arc_length_sweep(wave, sample_count, body_length, &times)?;

    if let Some(summary) = SweepSummary::from_totals(&totals) {
        log::debug!(
            "period sweep: {} samples, min={:.6}, max={:.6}, mean={:.6}",
            totals.len(),
            summary.min,
            summary.max,
            summary.mean
        );
        if summary.spread() > CONSERVATION_WARN_SPREAD * body_length {
            log::warn!(
                "arclength varies by {:.4} over one period (body length {})",
                summary.spread(),
                body_length
            );
        }
    }

    Ok((times, totals))
}

/// Spread of total arclength over a sweep
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SweepSummary {
    /// `None` for an empty sweep
    pub fn from_totals(totals: &[f64]) -> Option<Self> {
        if totals.is_empty() {
            return None;
        }
        let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = totals.iter().sum::<f64>() / totals.len() as f64;
        Some(Self { min, max, mean })
    }

    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}
