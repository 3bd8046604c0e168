//! Bullet Hit demo driver
//!
//! Runs a seeded barrage for a fixed number of frames and reports every
//! frame in which the target was hit.
//!
//! Usage: `bullet-hit [light|normal|hell|settings.json]`

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use bullet_hit::consts::FRAME_RATE;
use bullet_hit::sim::Barrage;
use bullet_hit::{DensityPreset, ScanSettings};

fn settings_from_arg(arg: Option<String>) -> ScanSettings {
    match arg {
        None => {
            log::info!("Using default settings");
            ScanSettings::default()
        }
        Some(arg) => match DensityPreset::from_str(&arg) {
            Some(preset) => {
                log::info!("Using {} preset", preset.as_str());
                ScanSettings::from_preset(preset)
            }
            None => ScanSettings::load(Path::new(&arg)),
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Bullet Hit starting...");

    let settings = settings_from_arg(std::env::args().nth(1));
    let frames = settings.frames;
    log::info!(
        "Seed {}, {} emitters x {} bullets every {} frames, {} frames",
        settings.seed,
        settings.emitters,
        settings.bullets_per_ring,
        settings.ring_interval,
        frames
    );

    let mut barrage = Barrage::new(settings);
    let mut total_hits = 0usize;
    let mut hit_frames = 0u32;
    let mut peak_live = 0usize;
    let mut tested = 0usize;
    let started = Instant::now();

    for _ in 0..frames {
        let report = match barrage.tick() {
            Ok(report) => report,
            Err(e) => {
                log::error!("Frame {}: {}", barrage.frame, e);
                return ExitCode::FAILURE;
            }
        };

        tested += report.live;
        peak_live = peak_live.max(report.live);
        if !report.hits.is_empty() {
            hit_frames += 1;
            total_hits += report.hits.len();
            log::info!(
                "Frame {} ({:.2}s): hit by {:?} ({} live)",
                report.frame,
                report.frame as f64 / FRAME_RATE as f64,
                report.hits,
                report.live
            );
        }
    }

    let elapsed = started.elapsed();
    log::info!(
        "Done: {} hits over {} of {} frames, peak {} live bullets, {} tests in {:?}",
        total_hits,
        hit_frames,
        frames,
        peak_live,
        tested,
        elapsed
    );
    println!("{total_hits} hits in {hit_frames} frames");

    ExitCode::SUCCESS
}
