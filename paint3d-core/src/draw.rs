/// Draw requests and the per-cycle list that collects them
use nalgebra::Point2;

use crate::color::Color;

/// One projected face waiting to be composited
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    pub polygon: Vec<Point2<f64>>,
    /// Distance of the unrotated face centroid from the world origin
    pub depth: f64,
    pub fill: Color,
    pub outline: Color,
}

/// Caller-owned accumulator for one render cycle.
///
/// Objects append to it, the compositor drains it furthest-first. A drained list is empty and
/// ready for the next cycle.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    requests: Vec<DrawRequest>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            requests: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, request: DrawRequest) {
        self.requests.push(request);
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }

    /// Requests in insertion order
    pub fn requests(&self) -> &[DrawRequest] {
        &self.requests
    }

    /// Requests ordered furthest-first without consuming the list. Ties keep insertion order.
    pub fn sorted(&self) -> Vec<&DrawRequest> {
        let mut sorted: Vec<&DrawRequest> = self.requests.iter().collect();
        sorted.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        sorted
    }

    /// Take every request out, ordered furthest-first
    pub fn drain_sorted(&mut self) -> Vec<DrawRequest> {
        let mut drained = std::mem::take(&mut self.requests);
        drained.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        drained
    }
}
