//! Geometric primitives shared by the recognizers.

use handsign_landmark_model::landmark::Landmark;

/// Similarity reported for degenerate (zero-length) vectors.
///
/// Every straightness threshold is positive, so this always reads as
/// "not similar".
pub const DEGENERATE_SIMILARITY: f64 = 0.0;

/// A 3D direction between two landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

/// Vector from `a` to `b` (`b - a`).
pub fn subtract(a: &Landmark, b: &Landmark) -> Vector3 {
    Vector3::new(b.x - a.x, b.y - a.y, b.z - a.z)
}

/// Cosine of the angle between two vectors.
///
/// Returns [`DEGENERATE_SIMILARITY`] when either vector has zero length or
/// the result is not finite, so coincident landmarks never produce NaN.
pub fn cosine_similarity(v1: &Vector3, v2: &Vector3) -> f64 {
    let denom = v1.length() * v2.length();
    if denom == 0.0 || !denom.is_finite() {
        return DEGENERATE_SIMILARITY;
    }
    let sim = v1.dot(v2) / denom;
    if sim.is_finite() {
        sim
    } else {
        DEGENERATE_SIMILARITY
    }
}
