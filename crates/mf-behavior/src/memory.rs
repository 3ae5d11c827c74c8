//! Agent memory carried from one turn to the next.

use std::collections::VecDeque;

use mf_core::LocationId;
use mf_graph::Route;

/// The places an agent still intends to visit, in order.
///
/// Depending on the agent this is the rest of a planned route, the rest of a
/// fixed itinerary, or nothing.  The runner never looks inside; it only
/// passes back whatever the agent returned on the previous turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory(VecDeque<LocationId>);

impl Memory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Remove and return the next planned place.
    pub fn pop_next(&mut self) -> Option<LocationId> {
        self.0.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.0.iter().copied()
    }
}

impl From<Route> for Memory {
    fn from(route: Route) -> Self {
        Self(route.into_stops().into())
    }
}

impl FromIterator<LocationId> for Memory {
    fn from_iter<I: IntoIterator<Item = LocationId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
