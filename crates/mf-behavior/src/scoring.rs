//! An agent that picks the cheapest parcel to serve next.

use rand::RngCore;

use mf_graph::{RoadGraph, Route, find_route};
use mf_village::VillageState;

use crate::model::parcel_target;
use crate::{Agent, AgentError, AgentResult, Decision, Memory};

/// Bonus for a route that ends in a pickup.  Worth less than one road, so it
/// only breaks ties between equally long routes.
const PICKUP_BONUS: f64 = 0.5;

/// Whenever its plan runs out, routes to every undelivered parcel (pickup if
/// not held, address if held) and follows the best-scoring route:
///
/// ```text
/// score = (PICKUP_BONUS if pickup else 0) - route length
/// ```
///
/// Ties go to the parcel listed first.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoringAgent;

impl ScoringAgent {
    fn score(route: &Route, pickup: bool) -> f64 {
        let bonus = if pickup { PICKUP_BONUS } else { 0.0 };
        bonus - route.len() as f64
    }
}

impl Agent for ScoringAgent {
    fn name(&self) -> &'static str {
        "scoring"
    }

    fn decide(
        &self,
        state:  &VillageState,
        memory: Memory,
        graph:  &RoadGraph,
        _rng:   &mut dyn RngCore,
    ) -> AgentResult<Decision> {
        if !memory.is_empty() {
            return Ok(Decision::follow(state.place, memory));
        }

        let mut best: Option<(f64, Route)> = None;
        for parcel in state.parcels.iter() {
            let (target, pickup) = parcel_target(state, parcel);
            let route = find_route(graph, state.place, target)?;
            let score = Self::score(&route, pickup);
            // Strictly greater: the first maximal candidate wins.
            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((score, route));
            }
        }

        let (_, route) = best.ok_or(AgentError::NoParcels)?;
        Ok(Decision::follow(state.place, route.into()))
    }
}
