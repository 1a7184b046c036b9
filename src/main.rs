use bubble_tracker::prelude::*;

fn main() {
    env_logger::init();

    // Demo: a bright synthetic bubble over a textured background.
    let (w, h) = (320usize, 240usize);
    let background: Vec<u8> = (0..w * h)
        .map(|i| 40 + ((i % w) * 7 + (i / w) * 3) as u8 % 10)
        .collect();
    let mut frame = background.clone();
    let (cx, cy, r) = (177.0f32, 110.0f32, 20.0f32);
    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = (x as f32 - cx, y as f32 - cy);
            if dx * dx + dy * dy <= r * r {
                frame[y * w + x] += 120;
            }
        }
    }
    let background = GrayImageU8::new(w, h, background);
    let frame = GrayImageU8::new(w, h, frame);

    let processor = match FrameProcessor::new(ProcessingParams::default()) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let context = FrameContext::for_nozzle(2.0, FlowArea::new(0, 215, 0, w));
    match processor.process(&frame, &background, &context, BubbleTrackState::default()) {
        Ok((state, FrameOutcome::Segmented(m))) => println!(
            "bubble={} target={} volume_mm3={:.2} radius_mm={:.3} latency_ms={:.1}",
            state.bubble_index,
            m.bubble.is_target_frame,
            m.volume_mm3,
            m.equivalent_radius_mm,
            m.timings.total_ms
        ),
        Ok((_, outcome)) => println!("no bubble: {outcome:?}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
