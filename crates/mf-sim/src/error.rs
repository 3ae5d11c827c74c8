use mf_behavior::AgentError;
use mf_graph::GraphError;
use mf_village::VillageError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("task generation failed: {0}")]
    Village(#[from] VillageError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SimResult<T> = Result<T, SimError>;
