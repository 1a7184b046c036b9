use bubble_tracker::config::segment_frames::{load_config, DatasetConfig, OutputConfig};
use bubble_tracker::diagnostics::{summarize_bubbles, FrameReport, SequenceReport};
use bubble_tracker::image::io::{
    list_frames, load_grayscale_image, save_field_normalized, save_mask, write_json_file,
};
use bubble_tracker::pipeline::fan_out;
use bubble_tracker::{BubbleTrackState, FrameProcessor};
use log::{info, warn};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "Usage: segment_frames <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;
    let processor = FrameProcessor::new(config.params.clone())
        .map_err(|e| format!("Invalid processing parameters: {e}"))?;

    let results = fan_out(&config.datasets, |ds| {
        process_dataset(&processor, ds, &config.output)
    });

    let mut failed = 0usize;
    for (ds, result) in config.datasets.iter().zip(results) {
        match result {
            Ok(report) => println!(
                "{}: {} frames, {} segmented, {} bubbles, {:.1} ms",
                ds.name,
                report.frame_count,
                report.segmented,
                report.bubbles.len(),
                report.total_ms
            ),
            Err(err) => {
                eprintln!("{}: {err}", ds.name);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(format!(
            "{failed} of {} datasets failed",
            config.datasets.len()
        ));
    }
    Ok(())
}

fn process_dataset(
    processor: &FrameProcessor,
    ds: &DatasetConfig,
    output: &OutputConfig,
) -> Result<SequenceReport, String> {
    let start = Instant::now();
    let background = load_grayscale_image(&ds.background)?;
    let frames = list_frames(&ds.frames_dir)?;
    if frames.is_empty() {
        warn!("{}: no frames in {}", ds.name, ds.frames_dir.display());
    }
    let context = ds.context();

    let mut state = BubbleTrackState::default();
    let mut reports = Vec::with_capacity(frames.len());
    for (ordinal, path) in frames.iter().enumerate() {
        let frame = load_grayscale_image(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("frame{ordinal:05}"));
        let (next, outcome) = processor
            .process(&frame, &background, &context, state)
            .map_err(|e| format!("Failed to process {}: {e}", path.display()))?;
        state = next;

        let mut report = FrameReport::new(ordinal, stem.as_str(), &outcome);
        if let Some(m) = outcome.measurement().filter(|m| m.bubble.is_target_frame) {
            let index = m.bubble.bubble_index;
            let mask_name = format!("{stem}-{index}.png");
            save_mask(&m.bubble.mask, &ds.output_dir.join(&mask_name))?;
            if output.save_level_sets {
                let phi_name = format!("{stem}-{index}-phi.png");
                save_field_normalized(&m.level_set, &ds.output_dir.join(phi_name))?;
            }
            report = report.with_mask_file(mask_name);
            info!(
                "Image {stem} for nozzle diameter {} mm was segmented (bubble {index})",
                ds.diameter_mm
            );
        }
        reports.push(report);
    }

    let params = processor.params();
    let bubbles = summarize_bubbles(&reports, &params.fluid, params.scale_factor, ds.frame_rate);
    let report = SequenceReport::new(
        ds.name.as_str(),
        ds.diameter_mm,
        reports,
        bubbles,
        state,
        start.elapsed().as_secs_f64() * 1000.0,
    );
    write_json_file(&ds.output_dir.join(&output.report_name), &report)?;
    Ok(report)
}
