//! Validated, scaled hand snapshots.
//!
//! Detector output is untrusted: a [`HandFrame`] may carry the wrong number
//! of landmarks or non-finite coordinates. Converting it to a
//! [`HandSnapshot`] is the single place where that is checked, so every
//! recognizer can index the 21 landmarks without bounds failures.

use std::ops::Index;

use handsign_common::error::{HandsignError, HandsignResult};
use handsign_landmark_model::landmark::{HandFrame, Handedness, Landmark, LANDMARK_COUNT, WRIST};

use crate::vector_math::{subtract, Vector3};

/// A complete hand in the classifier's working coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSnapshot {
    pub handedness: Handedness,
    points: [Landmark; LANDMARK_COUNT],
}

impl HandSnapshot {
    /// Validate `frame` and scale its landmarks by `scale`.
    pub fn from_frame(frame: &HandFrame, scale: f64) -> HandsignResult<Self> {
        if frame.landmarks.len() != LANDMARK_COUNT {
            return Err(HandsignError::invalid_frame(format!(
                "expected {LANDMARK_COUNT} landmarks, got {}",
                frame.landmarks.len()
            )));
        }

        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (idx, (slot, landmark)) in points.iter_mut().zip(&frame.landmarks).enumerate() {
            let scaled = landmark.scaled(scale);
            if !scaled.is_finite() {
                return Err(HandsignError::invalid_frame(format!(
                    "landmark {idx} has a non-finite coordinate"
                )));
            }
            *slot = scaled;
        }

        Ok(Self {
            handedness: frame.handedness,
            points,
        })
    }

    /// Build a snapshot from already-scaled points.
    pub fn from_points(handedness: Handedness, points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { handedness, points }
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    pub fn wrist(&self) -> &Landmark {
        &self.points[WRIST]
    }

    /// Vector from landmark `from` to landmark `to`.
    pub fn vector(&self, from: usize, to: usize) -> Vector3 {
        subtract(&self.points[from], &self.points[to])
    }

    /// L1 distance between two landmarks of this hand.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.points[a].l1_distance(&self.points[b])
    }
}

impl Index<usize> for HandSnapshot {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handsign_landmark_model::landmark::{INDEX_TIP, THUMB_TIP};

    fn hand_with(count: usize) -> HandFrame {
        HandFrame::new(
            Handedness::Right,
            (0..count)
                .map(|i| Landmark::new(i as f64 / 100.0, 0.5, 0.0))
                .collect(),
        )
    }

    #[test]
    fn test_scales_landmarks() {
        let snap = HandSnapshot::from_frame(&hand_with(LANDMARK_COUNT), 512.0).unwrap();
        assert_eq!(snap.handedness, Handedness::Right);
        assert!((snap[INDEX_TIP].x - 0.08 * 512.0).abs() < 1e-9);
        assert!((snap.wrist().y - 256.0).abs() < 1e-9);
        assert!((snap.distance(THUMB_TIP, INDEX_TIP) - 0.04 * 512.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_wrong_landmark_count() {
        for count in [0, 20, 22] {
            let err = HandSnapshot::from_frame(&hand_with(count), 1.0).unwrap_err();
            assert!(err.is_invalid_frame(), "count {count} should be rejected");
        }
    }

    #[test]
    fn test_rejects_non_finite_coordinates() {
        let mut frame = hand_with(LANDMARK_COUNT);
        frame.landmarks[7].z = f64::NAN;
        let err = HandSnapshot::from_frame(&frame, 1.0).unwrap_err();
        assert!(err.to_string().contains("landmark 7"));
    }

    #[test]
    fn test_rejects_coordinates_that_overflow_when_scaled() {
        let mut frame = hand_with(LANDMARK_COUNT);
        frame.landmarks[0].x = 1e307;
        assert!(HandSnapshot::from_frame(&frame, 1.0).is_ok());
        let err = HandSnapshot::from_frame(&frame, 512.0).unwrap_err();
        assert!(err.is_invalid_frame());
        assert!(err.to_string().contains("landmark 0"));
    }

    #[test]
    fn test_vector_direction() {
        let snap = HandSnapshot::from_frame(&hand_with(LANDMARK_COUNT), 100.0).unwrap();
        let v = snap.vector(0, 4);
        assert!((v.x - 4.0).abs() < 1e-9);
        assert_eq!(v.y, 0.0);
    }
}
