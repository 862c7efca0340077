//! Synthetic hand poses and detection streams.
//!
//! Hand-built landmark sets in normalized image coordinates (y grows
//! downward) for exercising the classifier without a detector. Poses are
//! laid out for a right hand; left hands are mirrored about `x = 0.5`.

use serde::{Deserialize, Serialize};

use handsign_landmark_model::detection::{DetectionFrame, TimestampMs};
use handsign_landmark_model::landmark::{HandFrame, Handedness, Landmark, LANDMARK_COUNT};

/// Frame interval of generated streams (10 fps camera).
pub const FRAME_INTERVAL_MS: TimestampMs = 100;

/// Per-frame wrist travel used by generated sweeps (normalized units).
pub const SWEEP_STEP: f64 = 0.03;

/// A static hand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pose {
    /// All digits extended upward, fingers spread.
    PalmOpen,
    /// Index fingertip resting on the thumb tip.
    Ok,
    /// Side-on fist with the thumb pointing up.
    ThumbUp,
    /// Side-on fist with the thumb tucked across.
    Fist,
}

const PALM_OPEN: [(f64, f64); LANDMARK_COUNT] = [
    (0.50, 0.80),
    (0.44, 0.76),
    (0.40, 0.72),
    (0.36, 0.68),
    (0.32, 0.64),
    (0.45, 0.60),
    (0.45, 0.52),
    (0.45, 0.46),
    (0.45, 0.40),
    (0.50, 0.58),
    (0.50, 0.49),
    (0.50, 0.42),
    (0.50, 0.36),
    (0.55, 0.60),
    (0.55, 0.52),
    (0.55, 0.46),
    (0.55, 0.41),
    (0.60, 0.63),
    (0.60, 0.57),
    (0.60, 0.52),
    (0.60, 0.48),
];

const OK_SIGN: [(f64, f64); LANDMARK_COUNT] = [
    (0.50, 0.80),
    (0.44, 0.76),
    (0.41, 0.70),
    (0.40, 0.62),
    (0.40, 0.53),
    (0.45, 0.60),
    (0.44, 0.54),
    (0.43, 0.50),
    (0.40, 0.53),
    (0.50, 0.58),
    (0.50, 0.49),
    (0.50, 0.42),
    (0.50, 0.36),
    (0.55, 0.60),
    (0.55, 0.52),
    (0.55, 0.46),
    (0.55, 0.41),
    (0.60, 0.63),
    (0.60, 0.57),
    (0.60, 0.52),
    (0.60, 0.48),
];

// Curled fingers: each DIP folds back onto its MCP and the tip points
// back toward the wrist.
const THUMB_UP: [(f64, f64); LANDMARK_COUNT] = [
    (0.60, 0.60),
    (0.52, 0.50),
    (0.50, 0.42),
    (0.50, 0.36),
    (0.50, 0.30),
    (0.45, 0.50),
    (0.40, 0.50),
    (0.45, 0.50),
    (0.48, 0.50),
    (0.45, 0.55),
    (0.40, 0.55),
    (0.45, 0.55),
    (0.48, 0.55),
    (0.45, 0.60),
    (0.40, 0.60),
    (0.45, 0.60),
    (0.48, 0.60),
    (0.45, 0.65),
    (0.40, 0.65),
    (0.45, 0.65),
    (0.48, 0.65),
];

const FIST: [(f64, f64); LANDMARK_COUNT] = [
    (0.60, 0.60),
    (0.52, 0.50),
    (0.46, 0.48),
    (0.42, 0.48),
    (0.38, 0.48),
    (0.45, 0.50),
    (0.40, 0.50),
    (0.45, 0.50),
    (0.48, 0.50),
    (0.45, 0.55),
    (0.40, 0.55),
    (0.45, 0.55),
    (0.48, 0.55),
    (0.45, 0.60),
    (0.40, 0.60),
    (0.45, 0.60),
    (0.48, 0.60),
    (0.45, 0.65),
    (0.40, 0.65),
    (0.45, 0.65),
    (0.48, 0.65),
];

/// Build one hand in the given pose.
pub fn hand(pose: Pose, handedness: Handedness) -> HandFrame {
    let table = match pose {
        Pose::PalmOpen => &PALM_OPEN,
        Pose::Ok => &OK_SIGN,
        Pose::ThumbUp => &THUMB_UP,
        Pose::Fist => &FIST,
    };
    let mirror = handedness == Handedness::Left;
    let landmarks = table
        .iter()
        .map(|&(x, y)| Landmark::new(if mirror { 1.0 - x } else { x }, y, 0.0))
        .collect();
    HandFrame::new(handedness, landmarks)
}

/// Two open palms pressed together: identical landmarks, Left then Right.
pub fn pressed_palms() -> (HandFrame, HandFrame) {
    let left = hand(Pose::PalmOpen, Handedness::Left);
    let right = HandFrame::new(Handedness::Right, left.landmarks.clone());
    (left, right)
}

/// `frames` copies of a hand moving `(dx, dy)` per frame.
pub fn sweep(start: &HandFrame, frames: usize, dx: f64, dy: f64) -> Vec<HandFrame> {
    (0..frames)
        .map(|i| start.translated(dx * i as f64, dy * i as f64, 0.0))
        .collect()
}

/// Scripted detection streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Hold a pose still.
    Hold(Pose),
    /// Open palm moving toward decreasing image x.
    SweepLeft,
    /// Open palm moving toward increasing image x.
    SweepRight,
    /// Open palm moving down the image.
    SweepDown,
    /// Both palms pressed together.
    PressedPalms,
    /// Two left hands in view (a second person's hand).
    TwoLeftHands,
    /// No hand in view.
    Empty,
}

impl Scenario {
    /// Parse a scenario name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "palm-open" => Self::Hold(Pose::PalmOpen),
            "ok" => Self::Hold(Pose::Ok),
            "thumb-up" => Self::Hold(Pose::ThumbUp),
            "fist" => Self::Hold(Pose::Fist),
            "sweep-left" => Self::SweepLeft,
            "sweep-right" => Self::SweepRight,
            "sweep-down" => Self::SweepDown,
            "pressed-palms" => Self::PressedPalms,
            "two-left-hands" => Self::TwoLeftHands,
            "empty" => Self::Empty,
            _ => return None,
        })
    }

    /// All scenario names accepted by [`Scenario::from_name`].
    pub const NAMES: [&'static str; 10] = [
        "palm-open",
        "ok",
        "thumb-up",
        "fist",
        "sweep-left",
        "sweep-right",
        "sweep-down",
        "pressed-palms",
        "two-left-hands",
        "empty",
    ];

    /// Generate `frames` detections starting at `start_ms`.
    pub fn stream(
        &self,
        handedness: Handedness,
        frames: usize,
        start_ms: TimestampMs,
    ) -> Vec<DetectionFrame> {
        let hands: Vec<Vec<HandFrame>> = match *self {
            Self::Hold(pose) => vec![vec![hand(pose, handedness)]; frames],
            Self::SweepLeft => single(sweep(&hand(Pose::PalmOpen, handedness), frames, -SWEEP_STEP, 0.0)),
            Self::SweepRight => single(sweep(&hand(Pose::PalmOpen, handedness), frames, SWEEP_STEP, 0.0)),
            Self::SweepDown => single(sweep(&hand(Pose::PalmOpen, handedness), frames, 0.0, SWEEP_STEP)),
            Self::PressedPalms => {
                let (left, right) = pressed_palms();
                vec![vec![left, right]; frames]
            }
            Self::TwoLeftHands => {
                let left = hand(Pose::PalmOpen, Handedness::Left);
                let other = left.translated(0.1, 0.0, 0.0);
                vec![vec![left, other]; frames]
            }
            Self::Empty => vec![Vec::new(); frames],
        };

        hands
            .into_iter()
            .enumerate()
            .map(|(i, hands)| {
                DetectionFrame::new(start_ms + i as TimestampMs * FRAME_INTERVAL_MS, hands)
            })
            .collect()
    }
}

fn single(frames: Vec<HandFrame>) -> Vec<Vec<HandFrame>> {
    frames.into_iter().map(|f| vec![f]).collect()
}
