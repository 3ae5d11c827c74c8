//! The `Agent` trait — the extension point for delivery strategies.

use rand::RngCore;

use mf_core::LocationId;
use mf_graph::RoadGraph;
use mf_village::{Parcel, VillageState};

use crate::{AgentResult, Memory};

/// What an agent chose to do this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Place to move to.  A place with no road from the current one is
    /// allowed; the move is simply a no-op.
    pub direction: LocationId,

    /// Memory to hand back to the agent next turn.
    pub memory: Memory,
}

impl Decision {
    /// Take the next step of `plan`, keeping the rest as memory.
    ///
    /// An empty plan stays at `at`.
    pub(crate) fn follow(at: LocationId, mut plan: Memory) -> Self {
        let direction = plan.pop_next().unwrap_or(at);
        Self { direction, memory: plan }
    }
}

/// Pluggable delivery strategy.
///
/// # Thread safety
///
/// Comparison runs may drive the same agent from several Rayon workers, so
/// implementations must be `Send + Sync`.  Anything that varies between
/// turns belongs in [`Memory`], not in the agent.
///
/// # Example
///
/// ```rust,ignore
/// struct StayHome;
///
/// impl Agent for StayHome {
///     fn name(&self) -> &'static str { "stay-home" }
///
///     fn decide(&self, state: &VillageState, memory: Memory, _graph: &RoadGraph,
///               _rng: &mut dyn RngCore) -> AgentResult<Decision> {
///         Ok(Decision { direction: state.place, memory })
///     }
/// }
/// ```
pub trait Agent: Send + Sync {
    /// Short label used in logs and on the command line.
    fn name(&self) -> &'static str;

    /// Memory to start a run with.
    fn initial_memory(&self) -> Memory {
        Memory::empty()
    }

    /// Choose the next move.
    ///
    /// `rng` is the only source of randomness an agent may use, which keeps
    /// runs reproducible from a seed.
    fn decide(
        &self,
        state:  &VillageState,
        memory: Memory,
        graph:  &RoadGraph,
        rng:    &mut dyn RngCore,
    ) -> AgentResult<Decision>;
}

/// Where to head for `parcel`: its pickup place if the agent is not holding
/// it, otherwise its address.  The flag is `true` for a pickup.
pub(crate) fn parcel_target(state: &VillageState, parcel: &Parcel) -> (LocationId, bool) {
    if parcel.place != state.place {
        (parcel.place, true)
    } else {
        (parcel.address, false)
    }
}
