//! Handsign Gesture Core
//!
//! Turns a stream of hand-landmark detections into discrete gesture labels:
//! - **Window:** Fixed-capacity sliding history of one tracked hand
//! - **Motion:** Decide whether the tracked hand is holding still or moving
//! - **Static poses:** OK, thumb-up, and open palm from joint geometry
//! - **Dynamic motion:** Left/right/down sweeps of the wrist
//! - **Two hands:** Palm-to-palm match of a Left/Right pair
//! - **Session:** Per-stream orchestration of all of the above
//!
//! This crate does no I/O and has no platform dependencies.

pub mod dynamic;
pub mod motion;
pub mod profile;
pub mod session;
pub mod snapshot;
pub mod static_pose;
pub mod synthetic;
pub mod two_hand;
pub mod vector_math;
pub mod window;

pub use profile::ClassifierProfile;
pub use session::{classify_stream, GestureSession};
pub use window::Window;
