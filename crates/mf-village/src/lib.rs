//! `mf-village` — the world state the delivery agents act on.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`parcel`] | `Parcel` — pickup place and delivery address                 |
//! | [`state`]  | `VillageState` — agent place + undelivered parcels, `move_to` |
//! | [`error`]  | `VillageError`, `VillageResult<T>`                           |
//!
//! # State model
//!
//! `VillageState` is a value.  A move never edits the state it is called on;
//! it returns a fresh state and leaves the old one valid.  Parcels are held in
//! an `Arc<[Parcel]>`, so cloning a state is cheap and one generated task can
//! be handed to several runs without any of them seeing another's progress.

pub mod error;
pub mod parcel;
pub mod state;


pub use error::{VillageError, VillageResult};
pub use parcel::Parcel;
pub use state::VillageState;
