//! An agent that plans one parcel at a time.

use rand::RngCore;

use mf_graph::{RoadGraph, find_route};
use mf_village::VillageState;

use crate::model::parcel_target;
use crate::{Agent, AgentError, AgentResult, Decision, Memory};

/// Serves the first parcel in the state: routes to it, then to its address.
///
/// Memory holds the rest of the current route; a new one is planned only
/// when it runs out.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoalOrientedAgent;

impl Agent for GoalOrientedAgent {
    fn name(&self) -> &'static str {
        "goal"
    }

    fn decide(
        &self,
        state:  &VillageState,
        memory: Memory,
        graph:  &RoadGraph,
        _rng:   &mut dyn RngCore,
    ) -> AgentResult<Decision> {
        let plan = if memory.is_empty() {
            let parcel = state.parcels.first().ok_or(AgentError::NoParcels)?;
            let (target, _) = parcel_target(state, parcel);
            find_route(graph, state.place, target)?.into()
        } else {
            memory
        };
        Ok(Decision::follow(state.place, plan))
    }
}
