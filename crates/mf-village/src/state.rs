//! The village snapshot and its transition function.

use std::sync::Arc;

use rand::{Rng, RngCore};

use mf_core::LocationId;
use mf_graph::RoadGraph;

use crate::{Parcel, VillageError, VillageResult};

/// Where the agent is and which parcels are still undelivered.
///
/// Immutable: [`move_to`](Self::move_to) returns a new state.  Parcel order
/// carries no meaning but is preserved across moves, so planners that take
/// "the first parcel" behave deterministically.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VillageState {
    pub place:   LocationId,
    pub parcels: Arc<[Parcel]>,
}

impl VillageState {
    pub fn new(place: LocationId, parcels: impl Into<Arc<[Parcel]>>) -> Self {
        Self { place, parcels: parcels.into() }
    }

    /// Generate a task: the agent at `start` and `parcel_count` parcels, each
    /// with an address and a distinct pickup place drawn uniformly from the
    /// graph's locations.
    ///
    /// Fails when parcels are requested from a graph with fewer than two
    /// places, since no parcel could have distinct endpoints.
    pub fn random(
        graph:        &RoadGraph,
        start:        LocationId,
        parcel_count: usize,
        rng:          &mut dyn RngCore,
    ) -> VillageResult<Self> {
        let count = graph.location_count();
        if parcel_count > 0 && count < 2 {
            return Err(VillageError::TooFewLocations { count });
        }

        let mut pick = || LocationId(rng.gen_range(0..count) as u32);
        let parcels: Vec<Parcel> = (0..parcel_count)
            .map(|_| {
                let address = pick();
                let mut place = pick();
                while place == address {
                    place = pick();
                }
                Parcel::new(place, address)
            })
            .collect();

        Ok(Self::new(start, parcels))
    }

    /// Move the agent to `destination`.
    ///
    /// If no road joins the current place to `destination` the move is not
    /// legal and an identical state is returned; this is not an error.
    ///
    /// Otherwise every parcel at the current place travels with the agent,
    /// parcels that thereby reach their address are delivered (dropped), and
    /// the rest are untouched.  `self` is never modified.
    pub fn move_to(&self, graph: &RoadGraph, destination: LocationId) -> VillageState {
        if !graph.is_adjacent(self.place, destination) {
            return self.clone();
        }

        let parcels: Vec<Parcel> = self
            .parcels
            .iter()
            .map(|p| {
                if p.place == self.place {
                    Parcel::new(destination, p.address)
                } else {
                    *p
                }
            })
            .filter(|p| !p.is_delivered())
            .collect();

        VillageState::new(destination, parcels)
    }

    /// `true` once every parcel has been delivered.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.parcels.is_empty()
    }

    #[inline]
    pub fn parcel_count(&self) -> usize {
        self.parcels.len()
    }

    /// Parcels the agent is currently carrying (those at its place).
    pub fn holding(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter().filter(move |p| p.place == self.place)
    }
}
