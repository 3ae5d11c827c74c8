use mf_core::LocationId;
use mf_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    /// A planner was asked to decide with every parcel already delivered.
    #[error("no parcels left to plan for")]
    NoParcels,

    #[error("no road leaves {0}")]
    Stranded(LocationId),

    #[error("fixed-route agent needs at least one stop")]
    EmptyItinerary,

    #[error("unknown agent {0:?}; expected one of: random, route, goal, scoring")]
    UnknownAgent(String),

    #[error("routing failed: {0}")]
    Routing(#[from] GraphError),
}

pub type AgentResult<T> = Result<T, AgentError>;
