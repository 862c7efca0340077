//! Per-stream gesture session.
//!
//! A [`GestureSession`] owns the sliding window and the last two-hand pair
//! for one tracking stream and routes every detection frame to the right
//! recognizer:
//!
//! | hands in frame | action |
//! |---|---|
//! | 0 | clear the window, `None` |
//! | 1 | push into the window; once full, static pose or sweep |
//! | 2 (one Left, one Right) | store the pair, two-hand match |
//! | 2 (anything else) | clear the window and stored pair, `None` |
//! | more than 2 | `None`, state untouched |
//!
//! Every hand is validated before anything is mutated, so a frame that
//! fails with [`HandsignError::InvalidFrame`] leaves the session exactly
//! as it was.
//!
//! [`HandsignError::InvalidFrame`]: handsign_common::error::HandsignError::InvalidFrame

use handsign_common::error::{HandsignError, HandsignResult};
use handsign_landmark_model::detection::DetectionFrame;
use handsign_landmark_model::gesture::GestureLabel;

use crate::dynamic::DynamicGestureRecognizer;
use crate::motion::{self, Motion};
use crate::profile::ClassifierProfile;
use crate::snapshot::HandSnapshot;
use crate::static_pose::StaticPoseRecognizer;
use crate::two_hand::TwoHandGestureRecognizer;
use crate::window::Window;

/// Gesture classification state for a single tracking stream.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    profile: ClassifierProfile,
    window: Window,
    static_pose: StaticPoseRecognizer,
    dynamic: DynamicGestureRecognizer,
    two_hand: TwoHandGestureRecognizer,
    two_hand_snapshot: Option<(HandSnapshot, HandSnapshot)>,
    last_label: GestureLabel,
}

impl GestureSession {
    /// Create a session after validating the profile.
    pub fn new(profile: ClassifierProfile) -> HandsignResult<Self> {
        profile.validate()?;
        Ok(Self {
            window: Window::new(profile.window_capacity),
            static_pose: StaticPoseRecognizer::new(profile.static_pose),
            dynamic: DynamicGestureRecognizer::new(profile.dynamic),
            two_hand: TwoHandGestureRecognizer::new(profile.two_hand),
            two_hand_snapshot: None,
            last_label: GestureLabel::None,
            profile,
        })
    }

    /// Session with the live camera profile.
    pub fn live_stream() -> Self {
        Self::with_builtin(ClassifierProfile::live_stream())
    }

    /// Session with the video profile.
    pub fn video() -> Self {
        Self::with_builtin(ClassifierProfile::video())
    }

    // Built-in profiles always pass validation.
    fn with_builtin(profile: ClassifierProfile) -> Self {
        Self {
            window: Window::new(profile.window_capacity),
            static_pose: StaticPoseRecognizer::new(profile.static_pose),
            dynamic: DynamicGestureRecognizer::new(profile.dynamic),
            two_hand: TwoHandGestureRecognizer::new(profile.two_hand),
            two_hand_snapshot: None,
            last_label: GestureLabel::None,
            profile,
        }
    }

    /// Classify one detection frame.
    pub fn ingest(&mut self, frame: &DetectionFrame) -> HandsignResult<GestureLabel> {
        let label = match frame.hands.as_slice() {
            [] => {
                self.clear_window("no hand detected");
                GestureLabel::None
            }
            [hand] => {
                let snapshot = HandSnapshot::from_frame(hand, self.profile.single_hand_scale)?;
                self.ingest_single(snapshot)
            }
            [first, second] => {
                let scale = self.profile.two_hand_scale;
                let first = HandSnapshot::from_frame(first, scale)?;
                let second = HandSnapshot::from_frame(second, scale)?;
                self.ingest_pair(first, second)
            }
            hands => {
                for hand in hands {
                    HandSnapshot::from_frame(hand, self.profile.single_hand_scale)?;
                }
                tracing::trace!(hands = hands.len(), "Ignoring frame with extra hands");
                GestureLabel::None
            }
        };

        if label != self.last_label {
            tracing::debug!(
                timestamp_ms = frame.timestamp_ms,
                from = %self.last_label,
                to = %label,
                "Gesture label changed"
            );
            self.last_label = label;
        }
        Ok(label)
    }

    fn ingest_single(&mut self, snapshot: HandSnapshot) -> GestureLabel {
        self.window.push(snapshot);
        match motion::classify(&self.window, &self.profile.motion) {
            None => GestureLabel::None,
            Some(Motion::Static) => match self.window.newest() {
                Some(newest) => self.static_pose.classify(newest),
                None => GestureLabel::None,
            },
            Some(Motion::Dynamic) => self.dynamic.classify(&self.window),
        }
    }

    fn ingest_pair(&mut self, first: HandSnapshot, second: HandSnapshot) -> GestureLabel {
        if !first.handedness.is_opposite_of(second.handedness) {
            self.clear_window("ambiguous handedness in hand pair");
            self.two_hand_snapshot = None;
            return GestureLabel::None;
        }
        let label = self.two_hand.classify(&first, &second);
        self.two_hand_snapshot = Some((first, second));
        label
    }

    fn clear_window(&mut self, reason: &'static str) {
        if !self.window.is_empty() {
            tracing::debug!(frames = self.window.len(), reason, "Window cleared");
            self.window.clear();
        }
    }

    /// Return to the freshly created state.
    pub fn reset(&mut self) {
        self.window.clear();
        self.two_hand_snapshot = None;
        self.last_label = GestureLabel::None;
    }

    /// Number of frames currently buffered.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Label produced by the most recent successful `ingest`.
    pub fn last_label(&self) -> GestureLabel {
        self.last_label
    }

    /// Most recent Left/Right pair seen.
    pub fn two_hand_snapshot(&self) -> Option<&(HandSnapshot, HandSnapshot)> {
        self.two_hand_snapshot.as_ref()
    }

    pub fn profile(&self) -> &ClassifierProfile {
        &self.profile
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::live_stream()
    }
}

/// Classify a whole recorded stream with a fresh session, one label per frame.
///
/// A frame that fails validation aborts the run with a `Replay` error naming
/// its position in the stream.
pub fn classify_stream(
    profile: ClassifierProfile,
    frames: &[DetectionFrame],
) -> HandsignResult<Vec<GestureLabel>> {
    let mut session = GestureSession::new(profile)?;
    frames
        .iter()
        .enumerate()
        .map(|(idx, frame)| {
            session.ingest(frame).map_err(|e| {
                HandsignError::replay(format!("frame {idx} (t={}ms): {e}", frame.timestamp_ms))
            })
        })
        .collect()
}
