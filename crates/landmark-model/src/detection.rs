//! Per-frame detector output and the recorded detection stream format.
//!
//! A recorded stream is JSONL: one [`DetectionFrame`] per line, in
//! frame-acquisition order. Blank lines and lines starting with `#` are
//! ignored so a stream may carry a comment header.

use serde::{Deserialize, Serialize};

use crate::landmark::HandFrame;

/// Milliseconds since the start of the tracking stream.
pub type TimestampMs = u64;

/// Everything the detector reported for one video frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionFrame {
    /// Frame time; informational only, the classifier relies on order.
    #[serde(rename = "t", default)]
    pub timestamp_ms: TimestampMs,

    /// Detected hands (usually 0, 1, or 2).
    #[serde(default)]
    pub hands: Vec<HandFrame>,
}

impl DetectionFrame {
    pub fn new(timestamp_ms: TimestampMs, hands: Vec<HandFrame>) -> Self {
        Self {
            timestamp_ms,
            hands,
        }
    }

    /// A frame in which no hand was detected.
    pub fn empty(timestamp_ms: TimestampMs) -> Self {
        Self::new(timestamp_ms, Vec::new())
    }

    /// A frame with a single detected hand.
    pub fn single(timestamp_ms: TimestampMs, hand: HandFrame) -> Self {
        Self::new(timestamp_ms, vec![hand])
    }

    /// A frame with two detected hands.
    pub fn pair(timestamp_ms: TimestampMs, first: HandFrame, second: HandFrame) -> Self {
        Self::new(timestamp_ms, vec![first, second])
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }
}

/// Parse a detection stream from JSONL content.
pub fn parse_detection_stream(jsonl: &str) -> Result<Vec<DetectionFrame>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize frames to JSONL format.
pub fn serialize_detection_stream(frames: &[DetectionFrame]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
