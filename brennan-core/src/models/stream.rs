//! Real-time data stream points and their rolling window

use std::collections::VecDeque;

use serde::{Deserialize, Serialize, Serializer};

use crate::constants::stream::STREAM_WINDOW;
use crate::time::Timestamp;

/// One point of the activity stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// When the point was produced
    pub timestamp: Timestamp,
    /// In `[0, 100)`
    pub value: f64,
    /// Source label
    #[serde(rename = "type")]
    pub source: String,
}

/// Most recent points of a stream, oldest first
///
/// Holds at most `capacity` points; pushing into a full window evicts the
/// oldest. Serializes as a plain array.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamWindow {
    points: VecDeque<DataPoint>,
    capacity: usize,
}

impl Default for StreamWindow {
    fn default() -> Self {
        Self::new(STREAM_WINDOW)
    }
}

impl StreamWindow {
    /// Window of `capacity` points (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of points held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points held
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has arrived
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append `point`, returning the one evicted to make room
    pub fn push(&mut self, point: DataPoint) -> Option<DataPoint> {
        let evicted = if self.points.len() == self.capacity {
            self.points.pop_front()
        } else {
            None
        };
        self.points.push_back(point);
        evicted
    }

    /// Newest point
    pub fn latest(&self) -> Option<&DataPoint> {
        self.points.back()
    }

    /// Points, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &DataPoint> {
        self.points.iter()
    }

    /// Copy of the points, oldest first
    pub fn to_vec(&self) -> Vec<DataPoint> {
        self.points.iter().cloned().collect()
    }
}

impl Serialize for StreamWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.points)
    }
}
