//! Gesture labels emitted by the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of gestures the classifier can report.
///
/// Discriminants are the stable numeric codes consumed by overlay UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum GestureLabel {
    /// No recognized gesture.
    #[default]
    None = 0,
    /// Fist with the thumb raised.
    ThumbUp = 1,
    /// All five digits extended.
    PalmOpen = 2,
    /// Index fingertip touching the thumb tip, other fingers apart.
    #[serde(rename = "ok")]
    OK = 3,
    /// Both hands held palm to palm.
    TwoHandMatch = 4,
    /// Hand swept to the left.
    Left = 5,
    /// Hand swept to the right.
    Right = 6,
    /// Hand swept downward.
    Down = 7,
}

impl GestureLabel {
    /// All labels in code order.
    pub const ALL: [GestureLabel; 8] = [
        Self::None,
        Self::ThumbUp,
        Self::PalmOpen,
        Self::OK,
        Self::TwoHandMatch,
        Self::Left,
        Self::Right,
        Self::Down,
    ];

    /// Numeric code (0-7).
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Label for a numeric code, if the code is known.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ThumbUp => "thumb-up",
            Self::PalmOpen => "palm-open",
            Self::OK => "ok",
            Self::TwoHandMatch => "two-hand-match",
            Self::Left => "left",
            Self::Right => "right",
            Self::Down => "down",
        }
    }

    /// Whether this label comes from motion across the window.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Down)
    }

    /// Whether this label needs both hands.
    pub fn is_two_hand(&self) -> bool {
        matches!(self, Self::TwoHandMatch)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
