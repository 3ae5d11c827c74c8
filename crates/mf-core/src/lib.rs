//! `mf-core` — foundational types for the meadowfield delivery simulation.
//!
//! This crate is a dependency of every other `mf-*` crate.  It has no `mf-*`
//! dependencies and only `rand` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`ids`]    | `LocationId`                                    |
//! | [`rng`]    | `SimRng` (seeded, with derived child streams)   |
//! | [`config`] | `TrialConfig` — seed, trial count, task size    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrialConfig;
pub use ids::LocationId;
pub use rng::SimRng;
