//! Single-hand pose recognition from one snapshot.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. **OK:** index tip touches the thumb tip while staying apart from the
//!    middle, ring, and pinky tips.
//! 2. **Thumb up:** the four fingers are curled and the thumb joints rise
//!    monotonically (`tip.y < ip.y < mcp.y`, image y grows downward).
//! 3. **Palm open:** every digit's joint vectors are nearly collinear.
//!
//! Anything else is [`GestureLabel::None`].

use handsign_landmark_model::gesture::GestureLabel;
use handsign_landmark_model::landmark::*;

use crate::profile::{StaticPoseConfig, ThumbChain, ThumbUpRule};
use crate::snapshot::HandSnapshot;
use crate::vector_math::cosine_similarity;

/// Joints of the four non-thumb fingers, base to tip: `(mcp, pip, dip, tip)`.
const FINGERS: [(usize, usize, usize, usize); 4] = [
    (INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP),
    (RING_MCP, RING_PIP, RING_DIP, RING_TIP),
    (PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP),
];

/// Static pose recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticPoseRecognizer {
    config: StaticPoseConfig,
}

impl StaticPoseRecognizer {
    pub fn new(config: StaticPoseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StaticPoseConfig {
        &self.config
    }

    /// Classify one hand. Thumb-up rules that depend on handedness read it
    /// from the snapshot.
    pub fn classify(&self, hand: &HandSnapshot) -> GestureLabel {
        if self.is_ok(hand) {
            GestureLabel::OK
        } else if self.is_thumb_up(hand) {
            GestureLabel::ThumbUp
        } else if self.is_palm_open(hand) {
            GestureLabel::PalmOpen
        } else {
            GestureLabel::None
        }
    }

    pub fn is_ok(&self, hand: &HandSnapshot) -> bool {
        let d = self.config.ok_distance;
        let touching = hand.distance(INDEX_TIP, THUMB_TIP) < d
            && hand.distance(INDEX_TIP, MIDDLE_TIP) > d
            && hand.distance(INDEX_TIP, RING_TIP) > d
            && hand.distance(INDEX_TIP, PINKY_TIP) > d;
        if !touching {
            return false;
        }

        match self.config.ok_straightness {
            Some(min) => FINGERS.iter().all(|&(mcp, pip, dip, _)| {
                cosine_similarity(&hand.vector(mcp, pip), &hand.vector(mcp, dip)) > min
            }),
            None => true,
        }
    }

    pub fn is_thumb_up(&self, hand: &HandSnapshot) -> bool {
        let thumb_raised =
            hand[THUMB_TIP].y < hand[THUMB_IP].y && hand[THUMB_IP].y < hand[THUMB_MCP].y;
        if !thumb_raised {
            return false;
        }

        match self.config.thumb_up {
            ThumbUpRule::JointDistance { curl_threshold } => FINGERS
                .iter()
                .all(|&(mcp, _, dip, _)| hand.distance(dip, mcp) < curl_threshold),
            ThumbUpRule::KnuckleOrientation => fingers_fold_toward_wrist(hand),
        }
    }

    pub fn is_palm_open(&self, hand: &HandSnapshot) -> bool {
        let min = self.config.palm_straightness;
        // base->first against base->second and base->third
        let straight = |base: usize, first: usize, second: usize, third: usize| {
            let reference = hand.vector(base, first);
            cosine_similarity(&reference, &hand.vector(base, second)) >= min
                && cosine_similarity(&reference, &hand.vector(base, third)) >= min
        };

        let fingers = FINGERS
            .iter()
            .all(|&(mcp, pip, dip, tip)| straight(mcp, pip, dip, tip));

        let thumb = match self.config.thumb_chain {
            ThumbChain::FromCmc => straight(THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP),
            ThumbChain::FromMcp => {
                let reference = hand.vector(THUMB_MCP, THUMB_IP);
                cosine_similarity(&reference, &hand.vector(THUMB_MCP, THUMB_TIP)) >= min
                    && cosine_similarity(&reference, &hand.vector(THUMB_IP, THUMB_TIP)) >= min
            }
        };

        fingers && thumb
    }
}

/// Seen from the side, a fist's fingertips curl back past their middle
/// joints toward the wrist while staying on the knuckle side of it.
fn fingers_fold_toward_wrist(hand: &HandSnapshot) -> bool {
    let wrist_x = hand.wrist().x;
    match hand.handedness {
        Handedness::Right => FINGERS.iter().all(|&(_, pip, dip, tip)| {
            let x = hand[tip].x;
            x > hand[dip].x && x > hand[pip].x && x < wrist_x
        }),
        Handedness::Left => FINGERS.iter().all(|&(_, pip, dip, tip)| {
            let x = hand[tip].x;
            x < hand[dip].x && x < hand[pip].x && x > wrist_x
        }),
        Handedness::Unknown => false,
    }
}
