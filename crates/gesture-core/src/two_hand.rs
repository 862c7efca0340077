//! Two-hand palm-to-palm match on the current frame.

use handsign_landmark_model::gesture::GestureLabel;
use handsign_landmark_model::landmark::{FINGERTIPS, FINGER_MCPS};

use crate::profile::{ProximityMetric, TwoHandConfig};
use crate::snapshot::HandSnapshot;

/// Two-hand gesture recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoHandGestureRecognizer {
    config: TwoHandConfig,
}

impl TwoHandGestureRecognizer {
    pub fn new(config: TwoHandConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TwoHandConfig {
        &self.config
    }

    /// `TwoHandMatch` when a Left/Right pair has every compared landmark
    /// within the proximity threshold of its counterpart.
    ///
    /// Pairs that are not one Left and one Right hand never match; the
    /// session treats those as a tracking anomaly before getting here.
    pub fn classify(&self, first: &HandSnapshot, second: &HandSnapshot) -> GestureLabel {
        if !first.handedness.is_opposite_of(second.handedness) {
            return GestureLabel::None;
        }

        let mcps: &[usize] = if self.config.include_mcps {
            &FINGER_MCPS
        } else {
            &[]
        };

        let matched = FINGERTIPS
            .iter()
            .chain(mcps)
            .all(|&idx| self.close(first, second, idx));

        if matched {
            GestureLabel::TwoHandMatch
        } else {
            GestureLabel::None
        }
    }

    fn close(&self, first: &HandSnapshot, second: &HandSnapshot, idx: usize) -> bool {
        let (a, b) = (&first[idx], &second[idx]);
        let t = self.config.threshold;
        match self.config.metric {
            ProximityMetric::PerAxisXy => (a.x - b.x).abs() < t && (a.y - b.y).abs() < t,
            ProximityMetric::L1 => a.l1_distance(b) < t,
        }
    }
}
