//! Static vs. dynamic motion classification.
//!
//! Only the wrist (landmark 0) is considered, and only along x and y.
//! A window counts as static when the wrist moved less than the threshold
//! between the oldest and newest frames and between adjacent frames; which
//! adjacent pairs are checked depends on [`MotionCheck`].

use crate::profile::{MotionCheck, MotionConfig};
use crate::window::Window;

/// Result of the motion split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// The hand is holding a pose.
    Static,
    /// The hand is moving.
    Dynamic,
}

/// Whether the wrist stayed within `threshold` across the window.
///
/// A window that is not full is never static.
pub fn is_static(window: &Window, threshold: f64, check: MotionCheck) -> bool {
    if !window.is_full() || window.len() < 2 {
        return false;
    }

    let wrists = window.wrists();
    let within = |a: usize, b: usize| {
        (wrists[b].x - wrists[a].x).abs() < threshold
            && (wrists[b].y - wrists[a].y).abs() < threshold
    };

    let last = wrists.len() - 1;
    if !within(0, last) {
        return false;
    }

    match check {
        MotionCheck::AllPairs => (1..wrists.len()).all(|j| within(j - 1, j)),
        MotionCheck::LastPair => within(last - 1, last),
    }
}

/// Classify a full window as static or dynamic; `None` while filling.
pub fn classify(window: &Window, config: &MotionConfig) -> Option<Motion> {
    if !window.is_full() {
        return None;
    }
    if is_static(window, config.static_threshold, config.check) {
        Some(Motion::Static)
    } else {
        Some(Motion::Dynamic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::HandSnapshot;
    use handsign_landmark_model::landmark::{Handedness, Landmark, LANDMARK_COUNT};

    fn window_of(wrists: &[(f64, f64)]) -> Window {
        let mut window = Window::new(wrists.len());
        for &(x, y) in wrists {
            window.push(HandSnapshot::from_points(
                Handedness::Right,
                [Landmark::new(x, y, 0.0); LANDMARK_COUNT],
            ));
        }
        window
    }

    #[test]
    fn test_still_hand_is_static() {
        let window = window_of(&[(100.0, 100.0), (100.5, 99.8), (101.0, 100.2), (100.2, 100.1)]);
        assert!(is_static(&window, 3.5, MotionCheck::AllPairs));
        assert!(is_static(&window, 3.5, MotionCheck::LastPair));
    }

    #[test]
    fn test_endpoint_drift_is_dynamic() {
        // Each step is small but the hand drifts 6 units overall.
        let window = window_of(&[(100.0, 100.0), (102.0, 100.0), (104.0, 100.0), (106.0, 100.0)]);
        assert!(!is_static(&window, 3.5, MotionCheck::AllPairs));
        assert!(!is_static(&window, 3.5, MotionCheck::LastPair));
    }

    #[test]
    fn test_jump_in_middle_only_caught_by_all_pairs() {
        // Out and back between frames 1 and 2; endpoints and the last pair are still.
        let window = window_of(&[(100.0, 100.0), (100.0, 100.0), (110.0, 100.0), (100.0, 100.0), (100.0, 100.0)]);
        assert!(!is_static(&window, 2.5, MotionCheck::AllPairs));
        assert!(is_static(&window, 2.5, MotionCheck::LastPair));
    }

    #[test]
    fn test_vertical_motion_counts() {
        let window = window_of(&[(100.0, 100.0), (100.0, 110.0), (100.0, 120.0), (100.0, 130.0)]);
        assert!(!is_static(&window, 3.5, MotionCheck::AllPairs));
    }

    #[test]
    fn test_threshold_is_strict() {
        let window = window_of(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (3.5, 0.0)]);
        assert!(!is_static(&window, 3.5, MotionCheck::AllPairs));
    }

    #[test]
    fn test_partial_window_is_not_classified() {
        let mut window = Window::new(4);
        window.push(HandSnapshot::from_points(
            Handedness::Left,
            [Landmark::default(); LANDMARK_COUNT],
        ));
        assert!(!is_static(&window, 3.5, MotionCheck::AllPairs));
        let config = MotionConfig {
            static_threshold: 3.5,
            check: MotionCheck::AllPairs,
        };
        assert_eq!(classify(&window, &config), None);
    }

    #[test]
    fn test_classify_full_window() {
        let config = MotionConfig {
            static_threshold: 3.5,
            check: MotionCheck::AllPairs,
        };
        let still = window_of(&[(5.0, 5.0); 4]);
        let moving = window_of(&[(50.0, 5.0), (40.0, 5.0), (30.0, 5.0), (20.0, 5.0)]);
        assert_eq!(classify(&still, &config), Some(Motion::Static));
        assert_eq!(classify(&moving, &config), Some(Motion::Dynamic));
    }
}
