//! Classify a recorded detection stream.

use std::path::PathBuf;

use serde::Serialize;

use handsign_common::error::HandsignError;
use handsign_gesture_core::profile::{ClassifierProfile, MotionCheck};
use handsign_gesture_core::GestureSession;
use handsign_landmark_model::detection::parse_detection_stream;
use handsign_landmark_model::gesture::GestureLabel;

#[derive(Serialize)]
struct LabelLine {
    frame: usize,
    t: u64,
    hands: usize,
    label: GestureLabel,
    code: u8,
}

pub fn run(
    path: PathBuf,
    profile: String,
    last_pair: bool,
    changes_only: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut profile = ClassifierProfile::resolve(&profile)
        .map_err(|e| anyhow::anyhow!("Failed to load profile '{profile}': {e}"))?;
    if last_pair {
        profile = profile.with_motion_check(MotionCheck::LastPair);
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    let frames = parse_detection_stream(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse detection stream: {e}"))?;

    tracing::info!(
        frames = frames.len(),
        profile = %profile.name,
        "Replaying detection stream"
    );

    let mut session = GestureSession::new(profile)
        .map_err(|e| anyhow::anyhow!("Invalid profile: {e}"))?;

    if !json {
        println!("Replaying {} ({} frames)", path.display(), frames.len());
    }

    let mut previous = GestureLabel::None;
    let mut counts = [0usize; GestureLabel::ALL.len()];
    for (idx, frame) in frames.iter().enumerate() {
        let label = session
            .ingest(frame)
            .map_err(|e| {
                HandsignError::replay(format!("frame {idx} (t={}ms): {e}", frame.timestamp_ms))
            })?;
        counts[label.code() as usize] += 1;

        let changed = label != previous;
        previous = label;
        if changes_only && !changed {
            continue;
        }

        if json {
            let line = LabelLine {
                frame: idx,
                t: frame.timestamp_ms,
                hands: frame.hand_count(),
                label,
                code: label.code(),
            };
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!(
                "  {:>5}  {:>8}ms  hands={}  {}",
                idx,
                frame.timestamp_ms,
                frame.hand_count(),
                label
            );
        }
    }

    if !json {
        println!();
        println!("Label summary:");
        for label in GestureLabel::ALL {
            let count = counts[label.code() as usize];
            if count > 0 {
                println!("  {:<16} {}", label.as_str(), count);
            }
        }
    }

    Ok(())
}
