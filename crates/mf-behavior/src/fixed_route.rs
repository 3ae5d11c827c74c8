//! An agent that drives a fixed loop.

use rand::RngCore;

use mf_core::LocationId;
use mf_graph::meadowfield::MAIL_ROUTE;
use mf_graph::RoadGraph;
use mf_village::VillageState;

use crate::{Agent, AgentError, AgentResult, Decision, Memory};

/// Follows a predetermined itinerary, starting over when it runs out.
///
/// If the itinerary passes every place, two laps deliver any task, which
/// bounds the run length regardless of where the parcels are.
#[derive(Clone, Debug)]
pub struct FixedRouteAgent {
    itinerary: Vec<LocationId>,
}

impl FixedRouteAgent {
    pub fn new(itinerary: Vec<LocationId>) -> AgentResult<Self> {
        if itinerary.is_empty() {
            return Err(AgentError::EmptyItinerary);
        }
        Ok(Self { itinerary })
    }

    /// The Meadowfield mail loop, resolved against `graph`.
    pub fn mail_route(graph: &RoadGraph) -> AgentResult<Self> {
        let itinerary = MAIL_ROUTE
            .iter()
            .map(|name| graph.require(name))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(itinerary)
    }

    pub fn itinerary(&self) -> &[LocationId] {
        &self.itinerary
    }
}

impl Agent for FixedRouteAgent {
    fn name(&self) -> &'static str {
        "route"
    }

    fn initial_memory(&self) -> Memory {
        self.itinerary.iter().copied().collect()
    }

    fn decide(
        &self,
        state:  &VillageState,
        memory: Memory,
        _graph: &RoadGraph,
        _rng:   &mut dyn RngCore,
    ) -> AgentResult<Decision> {
        let plan = if memory.is_empty() { self.initial_memory() } else { memory };
        Ok(Decision::follow(state.place, plan))
    }
}
