use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VillageError {
    /// A parcel needs a pickup place distinct from its address.
    #[error("cannot generate parcels on a graph with {count} location(s); at least 2 are needed")]
    TooFewLocations { count: usize },
}

pub type VillageResult<T> = Result<T, VillageError>;
