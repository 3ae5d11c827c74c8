//! An agent that wanders.

use rand::RngCore;
use rand::seq::SliceRandom;

use mf_graph::RoadGraph;
use mf_village::VillageState;

use crate::{Agent, AgentError, AgentResult, Decision, Memory};

/// Moves to a uniformly random neighbor every turn.  Ignores memory.
///
/// Delivers everything eventually on a connected graph, but slowly.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomAgent;

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(
        &self,
        state:   &VillageState,
        _memory: Memory,
        graph:   &RoadGraph,
        rng:     &mut dyn RngCore,
    ) -> AgentResult<Decision> {
        let direction = *graph
            .neighbors(state.place)
            .choose(rng)
            .ok_or(AgentError::Stranded(state.place))?;
        Ok(Decision { direction, memory: Memory::empty() })
    }
}
