//! Carangiform Swimming Kinematics
//!
//! Evaluates the reference body wave, checks that the centerline arclength is
//! conserved over a tail-beat cycle, and prints the series as tab-separated
//! columns for plotting.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use thiserror::Error;

use swim_kinematics::constants::{BODY_LENGTH, SAMPLE_COUNT};
use swim_kinematics::{
    centerline, chord_length, compute_arc_length_table, displacement_profile, period_sweep,
    CarangiformWave, KinematicParams, KinematicsError, SampleGrid, SweepSummary,
};

/// Instant at which the body shape and arclength table are reported
const SNAPSHOT_TIME: f64 = 1.0;

/// Time samples across one period for the conservation check
const SWEEP_STEPS: usize = 200;

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Kinematics(#[from] KinematicsError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// Write one titled `x<TAB>y` series
fn render(
    out: &mut impl Write,
    title: &str,
    xs: impl IntoIterator<Item = f64>,
    ys: impl IntoIterator<Item = f64>,
) -> io::Result<()> {
    writeln!(out, "# {title}")?;
    for (x, y) in xs.into_iter().zip(ys) {
        writeln!(out, "{x:.6}\t{y:.9}")?;
    }
    writeln!(out)
}

/// Series title tagged with the snapshot instant
fn snapshot_title(quantity: &str) -> String {
    format!("{quantity} at t={SNAPSHOT_TIME}")
}

fn run() -> Result<(), AppError> {
    let params = KinematicParams::carangiform();
    let wave = CarangiformWave::new(params)?;
    log::info!(
        "Body wave: envelope={:?}, wavelength={:.3}, period={:.5}s, tail amplitude={:.3}",
        params.envelope,
        wave.wavelength(),
        wave.period(),
        wave.tail_amplitude()
    );

    let grid = SampleGrid::new(SAMPLE_COUNT, BODY_LENGTH)?;
    let profile = displacement_profile(&wave, &grid, SNAPSHOT_TIME);

    let table = compute_arc_length_table(&wave, SAMPLE_COUNT, BODY_LENGTH, SNAPSHOT_TIME)?;
    let chord = chord_length(&centerline(&wave, SAMPLE_COUNT, BODY_LENGTH, SNAPSHOT_TIME)?);
    log::info!(
        "✓ Arclength at t={}: {:.6} (chord estimate {:.6})",
        SNAPSHOT_TIME,
        table.total(),
        chord
    );

    let (times, totals) = period_sweep(&wave, SAMPLE_COUNT, BODY_LENGTH, SWEEP_STEPS)?;
    if let Some(summary) = SweepSummary::from_totals(&totals) {
        log::info!(
            "✓ Over one period: min={:.6}, max={:.6}, mean={:.6}, spread={:.6}",
            summary.min,
            summary.max,
            summary.mean,
            summary.spread()
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(
        &mut out,
        &snapshot_title("body shape h(z)"),
        grid.positions(),
        profile.iter().copied(),
    )?;
    render(
        &mut out,
        &snapshot_title("cumulative arclength s(z)"),
        table.positions(),
        table.as_slice().iter().copied(),
    )?;
    render(
        &mut out,
        "total arclength over one period",
        times.iter().copied(),
        totals.iter().copied(),
    )?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting carangiform kinematics evaluation...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
