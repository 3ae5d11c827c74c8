//! Graph-subsystem error type.

use thiserror::Error;

use mf_core::LocationId;

/// Errors produced by `mf-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A road descriptor did not split into exactly two non-empty labels.
    #[error("malformed road descriptor {0:?}: expected \"From-To\"")]
    MalformedEdge(String),

    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    /// The search exhausted every reachable place without finding the goal.
    /// Only possible on a disconnected graph.
    #[error("no route from {from} to {to}: road graph is disconnected")]
    Unreachable { from: LocationId, to: LocationId },
}

pub type GraphResult<T> = Result<T, GraphError>;
