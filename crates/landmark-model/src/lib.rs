//! Handsign Landmark Model
//!
//! Defines the data contracts between the external hand detector and the
//! gesture classifier:
//! - **Landmarks:** 3D points for the 21 standard hand-landmark positions
//! - **Detections:** Per-frame detector output (0, 1, or 2 hands)
//! - **Gestures:** The closed set of labels the classifier emits
//!
//! Landmark coordinates arrive normalized to the input image; the classifier
//! scales them by a profile-defined factor before measuring anything.

pub mod detection;
pub mod gesture;
pub mod landmark;

pub use detection::*;
pub use gesture::*;
pub use landmark::*;
