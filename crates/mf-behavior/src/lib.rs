//! `mf-behavior` — delivery agents.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`model`]       | `Agent` trait, `Decision`                                    |
//! | [`memory`]      | `Memory` — the plan an agent carries between turns           |
//! | [`random`]      | `RandomAgent` — wanders to a random neighbor                 |
//! | [`fixed_route`] | `FixedRouteAgent` — loops a fixed itinerary                  |
//! | [`goal`]        | `GoalOrientedAgent` — routes to the first parcel             |
//! | [`scoring`]     | `ScoringAgent` — routes to the cheapest parcel               |
//! | [`kind`]        | `AgentKind` — closed enum over the built-in agents           |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                               |
//!
//! # Design notes
//!
//! An agent is a pure decision function.  Each turn the runner hands it the
//! current [`VillageState`](mf_village::VillageState) and the memory it
//! returned last turn; the agent answers with the place to move to and the
//! memory to keep.  Agents hold no mutable state of their own, so one agent
//! value can drive any number of independent runs.

pub mod error;
pub mod fixed_route;
pub mod goal;
pub mod kind;
pub mod memory;
pub mod model;
pub mod random;
pub mod scoring;


pub use error::{AgentError, AgentResult};
pub use fixed_route::FixedRouteAgent;
pub use goal::GoalOrientedAgent;
pub use kind::AgentKind;
pub use memory::Memory;
pub use model::{Agent, Decision};
pub use random::RandomAgent;
pub use scoring::ScoringAgent;
