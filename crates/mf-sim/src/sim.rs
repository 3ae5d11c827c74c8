//! The `Sim` struct and its turn loop.

use rand::RngCore;

use mf_behavior::{Agent, Decision, Memory};
use mf_core::LocationId;
use mf_graph::RoadGraph;
use mf_village::VillageState;

use crate::{SimObserver, SimResult};

/// One agent working through one delivery task.
///
/// Holds the current state and the agent's memory between turns.  The graph
/// and agent are borrowed, so any number of `Sim`s can share them.
pub struct Sim<'a, A: Agent + ?Sized> {
    pub graph: &'a RoadGraph,
    pub agent: &'a A,

    /// Current village snapshot.  Replaced (never edited) each turn.
    pub state: VillageState,

    /// Memory the agent returned on its last turn.
    pub memory: Memory,

    /// Turns taken so far.
    pub turns: u64,
}

impl<'a, A: Agent + ?Sized> Sim<'a, A> {
    pub fn new(graph: &'a RoadGraph, agent: &'a A, state: VillageState, memory: Memory) -> Self {
        Self { graph, agent, state, memory, turns: 0 }
    }

    /// `true` once every parcel has been delivered.
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// Play one turn and return the move the agent asked for.
    pub fn step(&mut self, rng: &mut dyn RngCore) -> SimResult<LocationId> {
        let memory = std::mem::take(&mut self.memory);
        let Decision { direction, memory } =
            self.agent.decide(&self.state, memory, self.graph, rng)?;
        self.state = self.state.move_to(self.graph, direction);
        self.memory = memory;
        self.turns += 1;
        Ok(direction)
    }

    /// Play turns until every parcel is delivered and return the turn count.
    ///
    /// Calls observer hooks at every turn.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver + ?Sized>(
        &mut self,
        rng:      &mut dyn RngCore,
        observer: &mut O,
    ) -> SimResult<u64> {
        observer.on_run_start(self.agent.name(), &self.state);
        while !self.is_done() {
            let direction = self.step(rng)?;
            observer.on_turn(self.turns, direction, &self.state);
        }
        observer.on_run_end(self.agent.name(), self.turns);
        Ok(self.turns)
    }
}

/// Run `agent` on `state` from `memory` to completion; returns turns taken.
pub fn run_agent<A: Agent + ?Sized, O: SimObserver + ?Sized>(
    graph:    &RoadGraph,
    state:    VillageState,
    agent:    &A,
    memory:   Memory,
    rng:      &mut dyn RngCore,
    observer: &mut O,
) -> SimResult<u64> {
    Sim::new(graph, agent, state, memory).run(rng, observer)
}
