//! `mf-graph` — road graph and shortest-route search.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`network`]     | `RoadGraph` (CSR adjacency + label table), `RoadGraphBuilder` |
//! | [`router`]      | `Route`, `find_route` (breadth-first)                     |
//! | [`meadowfield`] | The village fixture: `ROADS`, `MAIL_ROUTE`, `meadowfield()` |
//! | [`error`]       | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Route`.                |

pub mod error;
pub mod meadowfield;
pub mod network;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use meadowfield::meadowfield;
pub use network::{RoadGraph, RoadGraphBuilder};
pub use router::{Route, find_route};
