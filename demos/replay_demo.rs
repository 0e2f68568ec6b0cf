//! Replays a recorded tracking session and prints knee angles.
//!
//! Usage: `cargo run --example replay_demo -- [recording.json] [options.json]`
//!
//! Without a recording, a synthetic squat is generated instead.

use bodytrack::*;

fn synthetic_squat(frames: u64) -> Vec<TrackingFrame> {
    (0..frames)
        .map(|i| {
            // Knee bends from straight to ~90 degrees and back.
            let phase = i as f32 / frames.max(1) as f32 * std::f32::consts::TAU;
            let bend = (1.0 - phase.cos()) * 0.5 * std::f32::consts::FRAC_PI_2;
            let shin = Vec3::new(0.0, -bend.cos(), bend.sin()) * 0.45;

            let mut skeleton = SkeletonSnapshot::new();
            for (side, x) in [("left", 0.1), ("right", -0.1)] {
                let hip = Vec3::new(x, 0.0, 0.0);
                let knee = hip + Vec3::new(0.0, -0.45, 0.0);
                skeleton.insert_position(format!("{side}_upLeg_joint"), hip);
                skeleton.insert_position(format!("{side}_leg_joint"), knee);
                skeleton.insert_position(format!("{side}_foot_joint"), knee + shin);
            }

            let body = BodyAnchor::new(1, skeleton)
                .with_transform(Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0)));
            TrackingFrame::new(i, i as f64 / 60.0).with_body(body)
        })
        .collect()
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let recording = args.next();
    let options = init(args.next().as_deref())?;

    let mut source = match recording {
        Some(path) => ReplaySource::from_path(path)?,
        None => ReplaySource::from_frames(synthetic_squat(30)),
    };

    let monitor = LimbAngleMonitor::from_options(&options);
    let offset = options.character_offset;

    let mut session = TrackingSession::new();
    session.subscribe(move |frame| {
        for body in &frame.bodies {
            let pose = body.overlay_pose(offset);
            let measurement = monitor.measure_body(frame.sequence, body);
            let angles: Vec<String> = measurement
                .limbs
                .iter()
                .map(|m| match m.angle {
                    Some(angle) => format!("{}: {angle:.1}", m.limb),
                    None => format!("{}: --", m.limb),
                })
                .collect();
            println!(
                "frame {:>4}  body {}  overlay at {:.2?}  {}",
                frame.sequence,
                body.id,
                pose.translation.to_array(),
                angles.join("  ")
            );
        }
    });

    let delivered = session.run(&mut source)?;
    log::info!("replayed {delivered} frame(s)");
    Ok(())
}
