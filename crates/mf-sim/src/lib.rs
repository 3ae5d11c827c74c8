//! `mf-sim` — drives delivery agents and compares them.
//!
//! # Turn loop
//!
//! ```text
//! while state has parcels:
//!   ① Decide — agent.decide(state, memory) → (direction, memory')
//!   ② Move   — state = state.move_to(direction)   (illegal move = no-op)
//!   ③ Adopt  — memory = memory'
//!   turns += 1
//! ```
//!
//! There is no turn limit.  On a connected graph every built-in agent
//! finishes; an agent that never makes progress keeps the loop running.
//!
//! # Comparison
//!
//! [`compare_agents`] draws `trials` random tasks from one seeded RNG and
//! runs both agents on each task, reporting mean turns per task.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs comparison trials on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mf_behavior::{GoalOrientedAgent, ScoringAgent, Agent};
//! use mf_core::TrialConfig;
//! use mf_sim::{NoopObserver, compare_agents};
//!
//! let graph = mf_graph::meadowfield()?;
//! let cmp = compare_agents(
//!     &graph,
//!     (&ScoringAgent, ScoringAgent.initial_memory()),
//!     (&GoalOrientedAgent, GoalOrientedAgent.initial_memory()),
//!     &TrialConfig::default(),
//!     &mut NoopObserver,
//! )?;
//! println!("{:.1} vs {:.1}", cmp.mean_a(), cmp.mean_b());
//! ```

pub mod compare;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use compare::{Comparison, compare_agents};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, run_agent};
