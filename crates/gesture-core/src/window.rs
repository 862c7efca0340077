//! Fixed-capacity sliding window of hand snapshots.
//!
//! Frame 0 is the oldest entry, frame `len() - 1` the newest. Pushing into a
//! full window evicts the oldest frame first, so `len() <= capacity()`
//! always holds.

use std::collections::VecDeque;

use handsign_landmark_model::landmark::Landmark;

use crate::snapshot::HandSnapshot;

/// Rolling history of one tracked hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    capacity: usize,
    frames: VecDeque<HandSnapshot>,
}

impl Window {
    /// Create an empty window. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            frames: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a snapshot, evicting the oldest one when full.
    pub fn push(&mut self, snapshot: HandSnapshot) {
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(snapshot);
    }

    /// Drop every stored frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Frame at `index` (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&HandSnapshot> {
        self.frames.get(index)
    }

    pub fn oldest(&self) -> Option<&HandSnapshot> {
        self.frames.front()
    }

    pub fn newest(&self) -> Option<&HandSnapshot> {
        self.frames.back()
    }

    /// Frames from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HandSnapshot> + '_ {
        self.frames.iter()
    }

    /// Wrist positions from oldest to newest.
    pub fn wrists(&self) -> Vec<Landmark> {
        self.frames.iter().map(|s| *s.wrist()).collect()
    }
}
