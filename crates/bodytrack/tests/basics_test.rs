//! End-to-end tests: replayed frames through a session into the monitor.

use std::sync::{Arc, Mutex};

use bodytrack::*;

fn leg_skeleton(left_foot: Vec3, right_foot: Option<Vec3>) -> SkeletonSnapshot {
    let mut skeleton = SkeletonSnapshot::new()
        .with_position(joints::LEFT_UP_LEG, Vec3::new(0.1, 0.0, 0.0))
        .with_position(joints::LEFT_LEG, Vec3::new(0.1, -0.45, 0.0))
        .with_position(joints::LEFT_FOOT, left_foot)
        .with_position(joints::RIGHT_UP_LEG, Vec3::new(-0.1, 0.0, 0.0))
        .with_position(joints::RIGHT_LEG, Vec3::new(-0.1, -0.45, 0.0));
    if let Some(foot) = right_foot {
        skeleton.insert_position(joints::RIGHT_FOOT, foot);
    }
    skeleton
}

fn squat_recording() -> Vec<TrackingFrame> {
    vec![
        // Standing: both legs straight.
        TrackingFrame::new(0, 0.0).with_body(BodyAnchor::new(
            1,
            leg_skeleton(Vec3::new(0.1, -0.9, 0.0), Some(Vec3::new(-0.1, -0.9, 0.0))),
        )),
        // Left knee bent to 90 degrees, right foot lost.
        TrackingFrame::new(1, 1.0 / 60.0).with_body(BodyAnchor::new(
            1,
            leg_skeleton(Vec3::new(0.1, -0.45, 0.45), None),
        )),
    ]
}

#[test]
fn test_replay_through_session() {
    let monitor = LimbAngleMonitor::default();
    let results = Arc::new(Mutex::new(Vec::new()));

    let mut session = TrackingSession::new();
    let sink = Arc::clone(&results);
    session.subscribe(move |frame| sink.lock().unwrap().extend(monitor.update(frame)));

    let mut source = ReplaySource::from_frames(squat_recording());
    assert_eq!(session.run(&mut source).unwrap(), 2);

    let results = results.lock().unwrap();
    assert_eq!(results.len(), 2);

    let standing = &results[0];
    assert!((standing.angle("left_knee").unwrap().degrees() - 180.0).abs() < 1e-3);
    assert!((standing.angle("right_knee").unwrap().degrees() - 180.0).abs() < 1e-3);

    let squat = &results[1];
    assert_eq!(squat.sequence, 1);
    assert!((squat.angle("left_knee").unwrap().degrees() - 90.0).abs() < 1e-3);
    assert!(squat.angle("right_knee").is_none());
}

#[test]
fn test_slow_consumer_sees_latest_only() {
    let monitor = LimbAngleMonitor::default();
    let latest = LatestFrame::new();

    let mut session = TrackingSession::new();
    let sink = latest.clone();
    session.subscribe(move |frame| sink.publish(monitor.update(frame)));

    let mut source = ReplaySource::from_frames(squat_recording());
    session.run(&mut source).unwrap();

    let newest = latest.take().unwrap();
    assert_eq!(newest[0].sequence, 1);
    assert_eq!(latest.dropped(), 1);
    assert!(latest.take().is_none());
}

#[test]
fn test_overlay_follows_body() {
    let body = BodyAnchor::new(1, SkeletonSnapshot::new())
        .with_transform(Mat4::from_translation(Vec3::new(2.0, 0.0, -1.0)));
    let pose = body.overlay_pose(DEFAULT_CHARACTER_OFFSET);
    assert!((pose.translation - Vec3::new(1.0, 0.0, -1.0)).length() < 1e-6);
}

#[test]
fn test_documented_scenarios() {
    let right = angle_at_pivot_in(AngleUnit::Degrees, Vec3::Y, Vec3::ZERO, Vec3::X).unwrap();
    assert!((right.value() - 90.0).abs() < 1e-4);

    let straight = angle_at_pivot_in(
        AngleUnit::Degrees,
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::ZERO,
        Vec3::new(0.0, -1.0, 0.0),
    )
    .unwrap();
    assert!((straight.value() - 180.0).abs() < 1e-4);

    assert!(matches!(
        angle_at_pivot(Vec3::ZERO, Vec3::ZERO, Vec3::X),
        Err(BodyTrackError::InvalidInput(_))
    ));
}

#[test]
fn test_init_with_defaults() {
    let options = init(None).unwrap();
    assert_eq!(options, Options::default());
    // Second initialization must not fail.
    init_logging();
}
