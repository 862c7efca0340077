//! Hand landmarks and per-hand detections.
//!
//! Index layout follows the 21-point hand topology used by common hand
//! landmark models: the wrist, then four joints per digit from base to tip.

use serde::{Deserialize, Serialize};

/// Number of landmarks in a complete hand detection.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Tips of all five digits, thumb first.
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Base knuckles of the four non-thumb fingers.
pub const FINGER_MCPS: [usize; 4] = [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// A 3D landmark point.
///
/// Serialized as a compact `[x, y, z]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Multiply every component by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Manhattan (L1) distance to another landmark.
    pub fn l1_distance(&self, other: &Landmark) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// Whether all components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Landmark {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Landmark> for [f64; 3] {
    fn from(l: Landmark) -> Self {
        [l.x, l.y, l.z]
    }
}

/// Which hand the detector believes it is looking at.
///
/// Deserializes from any detector category name; unrecognized names
/// (`"None"`, empty) become `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Handedness {
    Left,
    Right,
    #[default]
    Unknown,
}

impl Handedness {
    /// Map a detector category name (`"Left"`, `"right"`, ...) to a handedness.
    pub fn from_category(name: &str) -> Self {
        if name.eq_ignore_ascii_case("left") {
            Self::Left
        } else if name.eq_ignore_ascii_case("right") {
            Self::Right
        } else {
            Self::Unknown
        }
    }

    /// The other hand, if this one is known.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Unknown => Self::Unknown,
        }
    }

    /// True only for a known Left/Right pair.
    pub fn is_opposite_of(&self, other: Handedness) -> bool {
        *self != Self::Unknown && self.opposite() == other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for Handedness {
    fn from(name: String) -> Self {
        Self::from_category(&name)
    }
}

/// One detected hand: its landmarks plus a handedness tag.
///
/// The detector contract is exactly [`LANDMARK_COUNT`] landmarks, but this
/// type does not enforce it; the classifier rejects incomplete hands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    #[serde(default)]
    pub handedness: Handedness,
    pub landmarks: Vec<Landmark>,
}

impl HandFrame {
    pub fn new(handedness: Handedness, landmarks: Vec<Landmark>) -> Self {
        Self {
            handedness,
            landmarks,
        }
    }

    /// Landmark at `index`, if present.
    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// The wrist landmark, if present.
    pub fn wrist(&self) -> Option<&Landmark> {
        self.landmark(WRIST)
    }

    /// Whether the hand carries the full landmark set.
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() == LANDMARK_COUNT
    }

    /// Copy of this hand with every landmark translated by `(dx, dy, dz)`.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            handedness: self.handedness,
            landmarks: self
                .landmarks
                .iter()
                .map(|l| Landmark::new(l.x + dx, l.y + dy, l.z + dz))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_serializes_as_array() {
        let l = Landmark::new(0.25, 0.5, -0.125);
        let json = serde_json::to_string(&l).unwrap();
        assert_eq!(json, "[0.25,0.5,-0.125]");
        let parsed: Landmark = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, l);
    }

    #[test]
    fn test_l1_distance() {
        let a = Landmark::new(1.0, 2.0, 3.0);
        let b = Landmark::new(0.0, 4.0, 3.5);
        assert!((a.l1_distance(&b) - 3.5).abs() < 1e-12);
        assert_eq!(a.l1_distance(&a), 0.0);
    }

    #[test]
    fn test_scaled() {
        let l = Landmark::new(0.5, 0.25, 0.1).scaled(512.0);
        assert!((l.x - 256.0).abs() < 1e-9);
        assert!((l.y - 128.0).abs() < 1e-9);
        assert!((l.z - 51.2).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_detection() {
        assert!(Landmark::new(0.0, 0.0, 0.0).is_finite());
        assert!(!Landmark::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Landmark::new(0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_handedness_from_category() {
        assert_eq!(Handedness::from_category("Left"), Handedness::Left);
        assert_eq!(Handedness::from_category("RIGHT"), Handedness::Right);
        assert_eq!(Handedness::from_category("None"), Handedness::Unknown);
    }

    #[test]
    fn test_handedness_accepts_any_category_spelling() {
        let parsed: Vec<Handedness> =
            serde_json::from_str(r#"["left","RIGHT","Left","None","Unknown",""]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Handedness::Left,
                Handedness::Right,
                Handedness::Left,
                Handedness::Unknown,
                Handedness::Unknown,
                Handedness::Unknown,
            ]
        );
        assert_eq!(serde_json::to_string(&Handedness::Right).unwrap(), r#""Right""#);

        let raw = r#"{"handedness":"left","landmarks":[]}"#;
        let hand: HandFrame = serde_json::from_str(raw).unwrap();
        assert_eq!(hand.handedness, Handedness::Left);
    }

    #[test]
    fn test_handedness_opposites() {
        assert!(Handedness::Left.is_opposite_of(Handedness::Right));
        assert!(Handedness::Right.is_opposite_of(Handedness::Left));
        assert!(!Handedness::Left.is_opposite_of(Handedness::Left));
        assert!(!Handedness::Unknown.is_opposite_of(Handedness::Unknown));
        assert!(!Handedness::Unknown.is_opposite_of(Handedness::Left));
    }

    #[test]
    fn test_hand_frame_defaults_missing_handedness() {
        let raw = r#"{"landmarks":[[0.0,0.0,0.0]]}"#;
        let hand: HandFrame = serde_json::from_str(raw).unwrap();
        assert_eq!(hand.handedness, Handedness::Unknown);
        assert!(!hand.is_complete());
        assert_eq!(hand.wrist(), Some(&Landmark::new(0.0, 0.0, 0.0)));
        assert_eq!(hand.landmark(4), None);
    }

    proptest::proptest! {
        #[test]
        fn prop_l1_distance_is_symmetric_and_translation_free(
            ax in -500.0f64..500.0, ay in -500.0f64..500.0, az in -500.0f64..500.0,
            bx in -500.0f64..500.0, by in -500.0f64..500.0, bz in -500.0f64..500.0,
            shift in -100.0f64..100.0,
        ) {
            let a = Landmark::new(ax, ay, az);
            let b = Landmark::new(bx, by, bz);
            let a2 = Landmark::new(ax + shift, ay + shift, az + shift);
            let b2 = Landmark::new(bx + shift, by + shift, bz + shift);
            proptest::prop_assert!((a.l1_distance(&b) - b.l1_distance(&a)).abs() < 1e-9);
            proptest::prop_assert!((a.l1_distance(&b) - a2.l1_distance(&b2)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_translated_moves_every_landmark() {
        let hand = HandFrame::new(
            Handedness::Right,
            vec![Landmark::new(1.0, 1.0, 0.0); LANDMARK_COUNT],
        );
        let moved = hand.translated(-0.5, 2.0, 0.0);
        assert!(moved.is_complete());
        assert!(moved
            .landmarks
            .iter()
            .all(|l| *l == Landmark::new(0.5, 3.0, 0.0)));
        assert_eq!(moved.handedness, Handedness::Right);
    }
}
