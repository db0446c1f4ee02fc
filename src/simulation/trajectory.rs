//! Bounded history of rocket positions for the path trail
//!
//! Holds at most `capacity` positions in chronological order. Once full,
//! every new position evicts the single oldest one. Storage for both the
//! positions and the 2D render points is allocated once, at construction.

use std::collections::VecDeque;

use super::states::NVec3;

#[derive(Debug, Clone)]
pub struct TrajectoryRecorder {
    capacity: usize,
    points: VecDeque<NVec3>,
    points_2d: Vec<[f64; 2]>, // reused render buffer
}

impl TrajectoryRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
            points_2d: Vec::with_capacity(capacity),
        }
    }

    /// Append `x`, dropping the oldest entry if the buffer is full
    pub fn record(&mut self, x: NVec3) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(x);
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.points_2d.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest
    pub fn positions(&self) -> impl ExactSizeIterator<Item = &NVec3> + '_ {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&NVec3> {
        self.points.back()
    }

    /// (x, y) of every recorded position, oldest first, for drawing the trail
    /// as a connected line strip
    pub fn points_2d(&mut self) -> &[[f64; 2]] {
        self.points_2d.clear();
        self.points_2d.extend(self.points.iter().map(|p| [p.x, p.y]));
        &self.points_2d
    }
}
