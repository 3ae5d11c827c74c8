//! Simulation observer trait for progress reporting.

use mf_core::LocationId;
use mf_village::VillageState;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`compare_agents`][crate::compare_agents].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — move printer
///
/// ```rust,ignore
/// struct MovePrinter<'g> { graph: &'g RoadGraph }
///
/// impl SimObserver for MovePrinter<'_> {
///     fn on_turn(&mut self, _turn: u64, direction: LocationId, _state: &VillageState) {
///         println!("Moved to {}", self.graph.name(direction));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first turn of a run.
    fn on_run_start(&mut self, _agent: &str, _state: &VillageState) {}

    /// Called after each turn.
    ///
    /// `direction` is the move the agent asked for; `state` is the result.
    /// The two differ in place only when the move was illegal.
    fn on_turn(&mut self, _turn: u64, _direction: LocationId, _state: &VillageState) {}

    /// Called once every parcel has been delivered.
    fn on_run_end(&mut self, _agent: &str, _turns: u64) {}

    /// Called per comparison trial, in trial order, with both agents' turns.
    fn on_trial_end(&mut self, _trial: usize, _turns_a: u64, _turns_b: u64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
