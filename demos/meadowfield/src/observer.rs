//! Forwards simulation callbacks to `tracing`.

use tracing::{debug, info};

use mf_core::LocationId;
use mf_graph::RoadGraph;
use mf_sim::SimObserver;
use mf_village::VillageState;

/// Logs runs at `info` and individual moves and trials at `debug`
/// (`RUST_LOG=debug` to see them).
pub struct TracingObserver<'g> {
    graph: &'g RoadGraph,
}

impl<'g> TracingObserver<'g> {
    pub fn new(graph: &'g RoadGraph) -> Self {
        Self { graph }
    }
}

impl SimObserver for TracingObserver<'_> {
    fn on_run_start(&mut self, agent: &str, state: &VillageState) {
        info!(
            agent,
            start = self.graph.name(state.place),
            parcels = state.parcel_count(),
            "run started"
        );
    }

    fn on_turn(&mut self, turn: u64, direction: LocationId, state: &VillageState) {
        if state.place != direction {
            debug!(turn, requested = self.graph.name(direction), "no road, stayed put");
            return;
        }
        debug!(
            turn,
            moved_to = self.graph.name(direction),
            remaining = state.parcel_count(),
            "moved"
        );
    }

    fn on_run_end(&mut self, agent: &str, turns: u64) {
        info!(agent, turns, "all parcels delivered");
    }

    fn on_trial_end(&mut self, trial: usize, turns_a: u64, turns_b: u64) {
        debug!(trial, turns_a, turns_b, "trial finished");
    }
}
