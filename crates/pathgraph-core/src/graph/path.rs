//! Weighted path values produced by the weighted search
//!
//! A [`Path`] is an immutable sequence of segments plus the running total of
//! their costs. Extending a path returns a new value and leaves the receiver
//! unchanged, so partial paths can sit in a priority queue side by side.

use crate::error::Result;
use crate::graph::types::Cost;
use serde::Serialize;
use std::cmp::Ordering;

/// One step of a path: `start` to `end` at `cost`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Segment<N> {
    start: N,
    end: N,
    cost: Cost,
}

impl<N> Segment<N> {
    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<N> {
    start: N,
    segments: Vec<Segment<N>>,
    cost: Cost,
}

impl<N: Clone> Path<N> {
    /// Zero-cost path that starts and ends at `start`
    pub fn singleton(start: N) -> Self {
        Path {
            start,
            segments: Vec::new(),
            cost: Cost::ZERO,
        }
    }

    /// New path equal to this one plus a segment from its end to `next`.
    ///
    /// Fails with `InvalidCost` for negative or NaN costs.
    pub fn extend(&self, next: N, segment_cost: Cost) -> Result<Self> {
        segment_cost.validate()?;
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(Segment {
            start: self.end().clone(),
            end: next,
            cost: segment_cost,
        });
        Ok(Path {
            start: self.start.clone(),
            segments,
            cost: self.cost + segment_cost,
        })
    }
}

impl<N> Path<N> {
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Terminal node; the start node for a zero-segment path
    pub fn end(&self) -> &N {
        self.segments.last().map_or(&self.start, |s| &s.end)
    }

    /// Sum of the segment costs
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> std::slice::Iter<'_, Segment<N>> {
        self.segments.iter()
    }

    /// Every node on the path, start first
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        std::iter::once(&self.start).chain(self.segments.iter().map(|s| &s.end))
    }

    /// Order by cumulative cost alone; equal-cost paths compare `Equal`
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a Segment<N>;
    type IntoIter = std::slice::Iter<'a, Segment<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}
