//! Classifier profiles: the immutable threshold set a session runs with.
//!
//! The still-image/video path and the live camera path use the same
//! algorithms with different coordinate scales, thresholds, and a few
//! rule variants. Each is a built-in profile; custom profiles load from
//! JSON and are validated before use.

use std::path::Path;

use serde::{Deserialize, Serialize};

use handsign_common::error::{HandsignError, HandsignResult};

/// How strictly the wrist must hold still across the window to count as static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionCheck {
    /// Oldest/newest endpoints and every adjacent pair must be within threshold.
    AllPairs,
    /// Oldest/newest endpoints and only the newest adjacent pair.
    LastPair,
}

/// Which geometry decides that the four fingers are curled into a fist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ThumbUpRule {
    /// Each finger's DIP joint sits within `curl_threshold` (L1) of its MCP
    /// joint. Handedness is ignored.
    JointDistance { curl_threshold: f64 },
    /// Each fingertip points back past its PIP/DIP joints and stays between
    /// the knuckles and the wrist along x, mirrored for the left hand.
    /// Hands of unknown handedness never match.
    KnuckleOrientation,
}

/// Which thumb segments must be collinear for an open palm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbChain {
    /// CMC→MCP against CMC→IP and CMC→TIP.
    FromCmc,
    /// MCP→IP against MCP→TIP and IP→TIP.
    FromMcp,
}

/// How two corresponding landmarks are compared in the two-hand check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityMetric {
    /// `|dx| < t` and `|dy| < t`; depth is ignored.
    PerAxisXy,
    /// `|dx| + |dy| + |dz| < t`.
    L1,
}

/// Thresholds for the static/dynamic motion split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Maximum wrist x/y displacement (scaled units) that still counts as static.
    pub static_threshold: f64,
    pub check: MotionCheck,
}

/// Thresholds for single-hand static poses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticPoseConfig {
    /// L1 distance below which index and thumb tips touch, and above which
    /// the index tip is apart from the other fingertips.
    pub ok_distance: f64,
    /// When set, the OK pose also needs the base segments of the four
    /// fingers to be straighter than this cosine similarity.
    pub ok_straightness: Option<f64>,
    pub thumb_up: ThumbUpRule,
    /// Minimum cosine similarity between joint vectors of an extended digit.
    pub palm_straightness: f64,
    pub thumb_chain: ThumbChain,
}

/// Settings for wrist sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicConfig {
    /// Report decreasing image x as `Right` instead of `Left`, for
    /// mirrored (front camera) input.
    pub mirror_x: bool,
}

/// Thresholds for the two-hand match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoHandConfig {
    pub threshold: f64,
    pub metric: ProximityMetric,
    /// Also compare the four finger MCP joints, not just the fingertips.
    pub include_mcps: bool,
}

/// Complete classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierProfile {
    /// Human-readable profile name.
    pub name: String,
    /// Number of frames in the sliding window.
    pub window_capacity: usize,
    /// Factor applied to normalized landmarks of a single tracked hand.
    pub single_hand_scale: f64,
    /// Factor applied to normalized landmarks of a two-hand pair.
    pub two_hand_scale: f64,
    pub motion: MotionConfig,
    pub static_pose: StaticPoseConfig,
    pub dynamic: DynamicConfig,
    pub two_hand: TwoHandConfig,
}

impl ClassifierProfile {
    /// Still-image / video-file profile.
    pub fn video() -> Self {
        Self {
            name: "video".to_string(),
            window_capacity: 5,
            single_hand_scale: 512.0,
            two_hand_scale: 256.0,
            motion: MotionConfig {
                static_threshold: 2.5,
                check: MotionCheck::AllPairs,
            },
            static_pose: StaticPoseConfig {
                ok_distance: 0.3,
                ok_straightness: None,
                thumb_up: ThumbUpRule::JointDistance {
                    curl_threshold: 0.35,
                },
                palm_straightness: 0.95,
                thumb_chain: ThumbChain::FromCmc,
            },
            dynamic: DynamicConfig { mirror_x: false },
            two_hand: TwoHandConfig {
                threshold: 5.0,
                metric: ProximityMetric::PerAxisXy,
                include_mcps: false,
            },
        }
    }

    /// Live camera profile (front camera, mirrored).
    pub fn live_stream() -> Self {
        Self {
            name: "live".to_string(),
            window_capacity: 4,
            single_hand_scale: 512.0,
            two_hand_scale: 512.0,
            motion: MotionConfig {
                static_threshold: 3.5,
                check: MotionCheck::AllPairs,
            },
            static_pose: StaticPoseConfig {
                ok_distance: 40.0,
                ok_straightness: Some(0.8),
                thumb_up: ThumbUpRule::KnuckleOrientation,
                palm_straightness: 0.85,
                thumb_chain: ThumbChain::FromMcp,
            },
            dynamic: DynamicConfig { mirror_x: true },
            two_hand: TwoHandConfig {
                threshold: 30.0,
                metric: ProximityMetric::L1,
                include_mcps: true,
            },
        }
    }

    /// Built-in profile by name (`"video"`, `"live"`/`"live-stream"`).
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "video" | "image" => Some(Self::video()),
            "live" | "live-stream" | "live_stream" => Some(Self::live_stream()),
            _ => None,
        }
    }

    /// Copy of this profile using a different motion check.
    pub fn with_motion_check(mut self, check: MotionCheck) -> Self {
        self.motion.check = check;
        self
    }

    /// Parse and validate a JSON profile.
    pub fn from_json_str(json: &str) -> HandsignResult<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a JSON profile file.
    pub fn load(path: impl AsRef<Path>) -> HandsignResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(HandsignError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Resolve a built-in profile name or a path to a profile file.
    pub fn resolve(name_or_path: &str) -> HandsignResult<Self> {
        match Self::builtin(name_or_path) {
            Some(profile) => Ok(profile),
            None => Self::load(name_or_path),
        }
    }

    /// Check that every threshold is usable.
    pub fn validate(&self) -> HandsignResult<()> {
        if self.window_capacity < 2 {
            return Err(HandsignError::config(format!(
                "window_capacity must be at least 2, got {}",
                self.window_capacity
            )));
        }

        positive("single_hand_scale", self.single_hand_scale)?;
        positive("two_hand_scale", self.two_hand_scale)?;
        positive("motion.static_threshold", self.motion.static_threshold)?;
        positive("static_pose.ok_distance", self.static_pose.ok_distance)?;
        if let Some(s) = self.static_pose.ok_straightness {
            cosine("static_pose.ok_straightness", s)?;
        }
        if let ThumbUpRule::JointDistance { curl_threshold } = self.static_pose.thumb_up {
            positive("static_pose.thumb_up.curl_threshold", curl_threshold)?;
        }
        cosine(
            "static_pose.palm_straightness",
            self.static_pose.palm_straightness,
        )?;
        positive("two_hand.threshold", self.two_hand.threshold)?;

        Ok(())
    }
}

impl Default for ClassifierProfile {
    fn default() -> Self {
        Self::live_stream()
    }
}

fn positive(field: &str, value: f64) -> HandsignResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HandsignError::config(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

fn cosine(field: &str, value: f64) -> HandsignResult<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(HandsignError::config(format!(
            "{field} must be in (0, 1], got {value}"
        )))
    }
}
