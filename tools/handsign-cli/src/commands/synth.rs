//! Generate a synthetic detection stream.

use std::path::PathBuf;

use handsign_gesture_core::synthetic::Scenario;
use handsign_landmark_model::detection::serialize_detection_stream;
use handsign_landmark_model::landmark::Handedness;

pub fn run(
    scenario: String,
    frames: usize,
    hand: String,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let parsed = Scenario::from_name(&scenario).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown scenario '{scenario}'. Available: {}",
            Scenario::NAMES.join(", ")
        )
    })?;

    let handedness = match Handedness::from_category(&hand) {
        Handedness::Unknown => anyhow::bail!("Unknown hand '{hand}' (expected left or right)"),
        known => known,
    };

    let stream = parsed.stream(handedness, frames, 0);
    let jsonl = serialize_detection_stream(&stream)
        .map_err(|e| anyhow::anyhow!("Failed to serialize stream: {e}"))?;

    match output {
        Some(path) => {
            std::fs::write(&path, jsonl)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?;
            tracing::info!(frames, scenario = %scenario, "Synthetic stream written");
            println!("Wrote {} frames to {}", stream.len(), path.display());
        }
        None => print!("{jsonl}"),
    }

    Ok(())
}
