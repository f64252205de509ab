use anyhow::{Context, Result};
use araceae::common::{ScopedTimer, TimerMode};
use araceae::signal::{FirFilter, FlankDetector, MovingAverageFilter, Strictness, Transition};
use araceae::FilterBank;
use nalgebra::DVector;
use std::collections::HashMap;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Noisy square wave: three periods of low then high
const SAMPLES: [f64; 24] = [
    0.0, 0.1, -0.1, 0.0, 1.0, 0.9, 1.1, 1.0, 0.0, 0.2, 0.0, -0.2, 1.0, 1.0, 0.8, 1.2, 0.0, 0.0,
    0.1, 0.0, 1.0, 1.1, 0.9, 1.0,
];

fn build_bank() -> Result<FilterBank> {
    let mut bank = FilterBank::new();

    let mut average_params = HashMap::new();
    average_params.insert("window_size".to_string(), 3.0);
    average_params.insert("initial_value".to_string(), 0.0);
    let average = MovingAverageFilter::from_params(&average_params)
        .context("failed to configure moving average stage")?;

    // Light smoothing that favours the newest sample
    let weights = DVector::from_vec(vec![0.5, 0.3, 0.2]);
    let fir = FirFilter::from_params(weights, &HashMap::new())
        .context("failed to configure FIR stage")?;

    bank.register(average);
    bank.register(fir);
    Ok(bank)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Initializing filter bank...");
    let mut bank = build_bank()?;
    info!(stages = ?bank.stage_names(), "Filter bank ready");

    let mut detector = FlankDetector::binary(0_i64, 1_i64);
    let _timer = ScopedTimer::new("Replay", 2, TimerMode::Delta);

    for (index, &sample) in SAMPLES.iter().enumerate() {
        let smoothed = bank.process(sample);
        let level = smoothed.round() as i64;
        match detector.rising_or_falling(&level, Strictness::Lenient)? {
            Transition::Rising => info!(index, sample, smoothed, "rising edge"),
            Transition::Falling => info!(index, sample, smoothed, "falling edge"),
            Transition::None => info!(index, sample, smoothed, "steady"),
        }
    }

    // Hold the last output while the input is known to be garbage
    bank.lock_all();
    let held = bank.process(f64::NAN);
    if held.is_nan() {
        warn!("locked bank leaked a new sample");
    }
    info!(held, "Holding output while locked");
    bank.unlock_all();

    if let Some(stage) = bank.stage_mut(0) {
        info!(stage = stage.name(), value = stage.value(), "First stage after replay");
    }

    Ok(())
}
