//! The closed set of built-in agents behind one type.

use rand::RngCore;

use mf_graph::RoadGraph;
use mf_village::VillageState;

use crate::{
    Agent, AgentError, AgentResult, Decision, FixedRouteAgent, GoalOrientedAgent, Memory,
    RandomAgent, ScoringAgent,
};

/// Any built-in agent, selected at runtime (e.g. from the command line)
/// and dispatched statically by `match`.
#[derive(Clone, Debug)]
pub enum AgentKind {
    Random(RandomAgent),
    FixedRoute(FixedRouteAgent),
    GoalOriented(GoalOrientedAgent),
    Scoring(ScoringAgent),
}

impl AgentKind {
    /// Labels accepted by [`from_label`](Self::from_label).
    pub const LABELS: [&'static str; 4] = ["random", "route", "goal", "scoring"];

    /// Build an agent from its label.  `route` follows the Meadowfield mail
    /// loop, so `graph` must contain its places.
    pub fn from_label(label: &str, graph: &RoadGraph) -> AgentResult<Self> {
        match label {
            "random"  => Ok(Self::Random(RandomAgent)),
            "route"   => Ok(Self::FixedRoute(FixedRouteAgent::mail_route(graph)?)),
            "goal"    => Ok(Self::GoalOriented(GoalOrientedAgent)),
            "scoring" => Ok(Self::Scoring(ScoringAgent)),
            other     => Err(AgentError::UnknownAgent(other.to_owned())),
        }
    }

}

/// Forward a call to whichever agent `self` holds.
macro_rules! dispatch {
    ($self:ident, $agent:ident => $call:expr) => {
        match $self {
            AgentKind::Random($agent)       => $call,
            AgentKind::FixedRoute($agent)   => $call,
            AgentKind::GoalOriented($agent) => $call,
            AgentKind::Scoring($agent)      => $call,
        }
    };
}

impl Agent for AgentKind {
    fn name(&self) -> &'static str {
        dispatch!(self, a => a.name())
    }

    fn initial_memory(&self) -> Memory {
        dispatch!(self, a => a.initial_memory())
    }

    fn decide(
        &self,
        state:  &VillageState,
        memory: Memory,
        graph:  &RoadGraph,
        rng:    &mut dyn RngCore,
    ) -> AgentResult<Decision> {
        dispatch!(self, a => a.decide(state, memory, graph, rng))
    }
}
