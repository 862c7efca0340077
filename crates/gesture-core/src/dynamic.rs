//! Directional sweeps of the wrist across a full window.
//!
//! Every adjacent frame pair is classified along x as either decreasing
//! (`x[j] < x[j-1]`) or non-decreasing (`x[j] >= x[j-1]`), and along y as
//! moving down the image (`y[j] > y[j-1]`) or not. A sweep is reported only
//! when every pair agrees.
//!
//! Precedence is Down, then Left, then Right. The two horizontal tests
//! partition each pair, so at most one of them can hold for the whole
//! window; Down wins over either so a vertical sweep with no horizontal
//! drift (which reads as non-decreasing x) is still a Down. Checking Left
//! first would report such a sweep as a horizontal one, because flat x
//! satisfies the non-strict test on every pair.

use handsign_landmark_model::gesture::GestureLabel;

use crate::profile::DynamicConfig;
use crate::window::Window;

/// Dynamic gesture recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicGestureRecognizer {
    config: DynamicConfig,
}

impl DynamicGestureRecognizer {
    pub fn new(config: DynamicConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DynamicConfig {
        &self.config
    }

    /// Classify the wrist trajectory of a full window.
    ///
    /// Windows that are not full, or hold fewer than two frames, yield `None`.
    pub fn classify(&self, window: &Window) -> GestureLabel {
        if !window.is_full() || window.len() < 2 {
            return GestureLabel::None;
        }

        let wrists = window.wrists();
        let pairs = || wrists.windows(2).map(|p| (p[0], p[1]));

        let all_decreasing = pairs().all(|(prev, cur)| cur.x < prev.x);
        let all_non_decreasing = pairs().all(|(prev, cur)| cur.x >= prev.x);
        let all_down = pairs().all(|(prev, cur)| cur.y > prev.y);

        // Mirrored input shows a leftward sweep as decreasing image x.
        let (left, right) = if self.config.mirror_x {
            (all_non_decreasing, all_decreasing)
        } else {
            (all_decreasing, all_non_decreasing)
        };

        if all_down {
            GestureLabel::Down
        } else if left {
            GestureLabel::Left
        } else if right {
            GestureLabel::Right
        } else {
            GestureLabel::None
        }
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

    fn plain() -> DynamicGestureRecognizer {
        DynamicGestureRecognizer::new(DynamicConfig { mirror_x: false })
    }

    fn mirrored() -> DynamicGestureRecognizer {
        DynamicGestureRecognizer::new(DynamicConfig { mirror_x: true })
    }

    #[test]
    fn test_decreasing_x_is_left() {
        let window = window_of(&[(200.0, 100.0), (180.0, 100.0), (160.0, 100.0), (140.0, 100.0)]);
        assert_eq!(plain().classify(&window), GestureLabel::Left);
    }

    #[test]
    fn test_increasing_x_is_right() {
        let window = window_of(&[(100.0, 100.0), (120.0, 100.0), (140.0, 100.0), (160.0, 100.0)]);
        assert_eq!(plain().classify(&window), GestureLabel::Right);
    }

    #[test]
    fn test_mirroring_swaps_horizontal_labels() {
        let leftward = window_of(&[(200.0, 100.0), (180.0, 100.0), (160.0, 100.0), (140.0, 100.0)]);
        let rightward = window_of(&[(100.0, 100.0), (120.0, 100.0), (140.0, 100.0), (160.0, 100.0)]);
        assert_eq!(mirrored().classify(&leftward), GestureLabel::Right);
        assert_eq!(mirrored().classify(&rightward), GestureLabel::Left);
    }

    #[test]
    fn test_increasing_y_is_down() {
        let window = window_of(&[(100.0, 100.0), (100.0, 120.0), (100.0, 140.0), (100.0, 160.0)]);
        assert_eq!(plain().classify(&window), GestureLabel::Down);
        assert_eq!(mirrored().classify(&window), GestureLabel::Down);
    }

    #[test]
    fn test_diagonal_sweep_prefers_down() {
        let window = window_of(&[(200.0, 100.0), (180.0, 120.0), (160.0, 140.0), (140.0, 160.0)]);
        assert_eq!(plain().classify(&window), GestureLabel::Down);
    }

    #[test]
    fn test_equal_x_counts_as_non_decreasing() {
        // Flat x and rising y: no sweep is down or left, so the non-strict test wins.
        let window = window_of(&[(100.0, 160.0), (100.0, 140.0), (100.0, 120.0), (100.0, 100.0)]);
        assert_eq!(plain().classify(&window), GestureLabel::Right);
        assert_eq!(mirrored().classify(&window), GestureLabel::Left);
    }

    #[test]
    fn test_zigzag_is_none() {
        let window = window_of(&[(100.0, 100.0), (120.0, 90.0), (110.0, 95.0), (130.0, 90.0)]);
        assert_eq!(plain().classify(&window), GestureLabel::None);
    }

    #[test]
    fn test_partial_window_is_none() {
        let mut window = Window::new(5);
        window.push(HandSnapshot::from_points(
            Handedness::Right,
            [Landmark::new(10.0, 10.0, 0.0); LANDMARK_COUNT],
        ));
        window.push(HandSnapshot::from_points(
            Handedness::Right,
            [Landmark::new(0.0, 10.0, 0.0); LANDMARK_COUNT],
        ));
        assert_eq!(plain().classify(&window), GestureLabel::None);
    }
}
