use std::path::PathBuf;

use handsign_gesture_core::session::{classify_stream, GestureSession};
use handsign_gesture_core::ClassifierProfile;
use handsign_landmark_model::detection::{parse_detection_stream, DetectionFrame};
use handsign_landmark_model::gesture::GestureLabel;

fn load_fixture_frames() -> Vec<DetectionFrame> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("detections-live.jsonl");

    let content = std::fs::read_to_string(path).expect("fixture detections should be readable");
    parse_detection_stream(&content).expect("fixture detections should parse")
}

fn codes(labels: &[GestureLabel]) -> Vec<u8> {
    labels.iter().map(|l| l.code()).collect()
}

#[test]
fn live_profile_fixture_labels_are_stable() {
    use GestureLabel::*;

    let frames = load_fixture_frames();
    assert_eq!(frames.len(), 30);

    let labels = classify_stream(ClassifierProfile::live_stream(), &frames).unwrap();
    let expected = vec![
        // open palm held
        None, None, None, PalmOpen,
        None,
        // OK sign, left hand
        None, None, None, OK,
        None,
        // sweep toward decreasing image x, mirrored camera
        None, None, None, Right,
        None,
        // sweep down, left hand
        None, None, None, Down,
        // palms pressed together
        TwoHandMatch, TwoHandMatch,
        None,
        // thumb up
        None, None, None, ThumbUp,
        // two left hands, then a fist that never fills the window
        None,
        None, None, None,
    ];
    assert_eq!(codes(&labels), codes(&expected));
}

#[test]
fn video_profile_needs_longer_holds() {
    let frames = load_fixture_frames();
    let labels = classify_stream(ClassifierProfile::video(), &frames).unwrap();

    let matched: Vec<usize> = labels
        .iter()
        .enumerate()
        .filter(|(_, l)| **l != GestureLabel::None)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(matched, vec![19, 20]);
    assert_eq!(labels[19], GestureLabel::TwoHandMatch);
}

#[test]
fn replay_after_reset_is_identical() {
    let frames = load_fixture_frames();
    let mut session = GestureSession::live_stream();

    let first: Vec<GestureLabel> = frames.iter().map(|f| session.ingest(f).unwrap()).collect();
    session.reset();
    let second: Vec<GestureLabel> = frames.iter().map(|f| session.ingest(f).unwrap()).collect();

    assert_eq!(first, second);
}

#[test]
fn last_pair_check_agrees_on_fixture() {
    // The fixture has no mid-window jumps, so both motion checks agree.
    let frames = load_fixture_frames();
    let all_pairs = classify_stream(ClassifierProfile::live_stream(), &frames).unwrap();
    let last_pair = classify_stream(
        ClassifierProfile::live_stream()
            .with_motion_check(handsign_gesture_core::profile::MotionCheck::LastPair),
        &frames,
    )
    .unwrap();
    assert_eq!(all_pairs, last_pair);
}
