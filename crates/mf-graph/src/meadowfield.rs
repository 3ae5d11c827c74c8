//! The village of Meadowfield: eleven places joined by fourteen roads.
//!
//! Used by the demo binary and as the standard fixture in tests.

use crate::{GraphResult, RoadGraph};

/// Road descriptors for the village.
pub const ROADS: [&str; 14] = [
    "Alice's House-Bob's House",
    "Alice's House-Cabin",
    "Alice's House-Post Office",
    "Bob's House-Town Hall",
    "Daria's House-Ernie's House",
    "Daria's House-Town Hall",
    "Ernie's House-Grete's House",
    "Grete's House-Farm",
    "Grete's House-Shop",
    "Marketplace-Farm",
    "Marketplace-Post Office",
    "Marketplace-Shop",
    "Marketplace-Town Hall",
    "Shop-Town Hall",
];

/// Where every delivery task starts.
pub const POST_OFFICE: &str = "Post Office";

/// A loop from the post office that passes every place at least once.
/// Following it twice delivers any set of parcels.
pub const MAIL_ROUTE: [&str; 13] = [
    "Alice's House",
    "Cabin",
    "Alice's House",
    "Bob's House",
    "Town Hall",
    "Daria's House",
    "Ernie's House",
    "Grete's House",
    "Shop",
    "Grete's House",
    "Farm",
    "Marketplace",
    "Post Office",
];

/// Build the Meadowfield road graph.
pub fn meadowfield() -> GraphResult<RoadGraph> {
    RoadGraph::from_edges(ROADS)
}
