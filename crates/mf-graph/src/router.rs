//! Breadth-first shortest-route search.
//!
//! Every road has the same cost, so the shortest route is the one with the
//! fewest roads and plain BFS finds it: places are expanded in
//! non-decreasing distance from the start, and the first time the goal shows
//! up as a neighbor the route to it is minimal.
//!
//! The search is iterative (a FIFO queue plus a predecessor array) so stack
//! usage does not grow with the size of the graph.

use std::collections::VecDeque;

use mf_core::LocationId;

use crate::network::RoadGraph;
use crate::{GraphError, GraphResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered list of places leading from a start to a goal.
///
/// The start itself is excluded; the goal is the last stop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    stops: Vec<LocationId>,
}

impl Route {
    pub fn new(stops: Vec<LocationId>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[LocationId] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<LocationId> {
        self.stops
    }

    /// Number of roads travelled.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// `true` if the start and goal are the same place.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The first move to make.
    pub fn first(&self) -> Option<LocationId> {
        self.stops.first().copied()
    }

    pub fn last(&self) -> Option<LocationId> {
        self.stops.last().copied()
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Shortest route (fewest roads) from `from` to `to`.
///
/// When several routes are equally short, the one discovered first wins;
/// discovery follows each place's neighbor order in `graph`.  Callers should
/// rely only on the length, not on which of the tied routes is returned.
///
/// `from == to` yields an empty route.  If the goal cannot be reached the
/// search fails with [`GraphError::Unreachable`]; it never returns a partial
/// route.
pub fn find_route(graph: &RoadGraph, from: LocationId, to: LocationId) -> GraphResult<Route> {
    if from == to {
        return Ok(Route::default());
    }

    let n = graph.location_count();
    if from.index() >= n {
        return Err(GraphError::Unreachable { from, to });
    }

    // prev[v] = place we reached v from; INVALID for places not yet queued.
    let mut prev   = vec![LocationId::INVALID; n];
    let mut queued = vec![false; n];
    let mut work: VecDeque<LocationId> = VecDeque::new();

    queued[from.index()] = true;
    work.push_back(from);

    while let Some(at) = work.pop_front() {
        for &next in graph.neighbors(at) {
            if next == to {
                return Ok(reconstruct(&prev, from, at, to));
            }
            // Already queued at an equal or shorter distance.
            if queued[next.index()] {
                continue;
            }
            queued[next.index()] = true;
            prev[next.index()] = at;
            work.push_back(next);
        }
    }

    Err(GraphError::Unreachable { from, to })
}

/// Walk `prev` back from `at` to `from`, then append `goal`.
fn reconstruct(prev: &[LocationId], from: LocationId, at: LocationId, goal: LocationId) -> Route {
    let mut stops = vec![goal];
    let mut cur = at;
    while cur != from {
        stops.push(cur);
        cur = prev[cur.index()];
    }
    stops.reverse();
    Route::new(stops)
}
