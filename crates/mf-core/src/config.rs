//! Trial configuration.

/// Parameters for generating and comparing delivery tasks.
///
/// Typically loaded from a JSON file by the application crate (enable the
/// `serde` feature) and passed to the comparison runner.  Missing fields
/// fall back to [`TrialConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrialConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of random tasks each agent is run against.
    pub trials: usize,

    /// Parcels per generated task.
    pub parcel_count: usize,

    /// Label of the place every task starts from.
    pub start: String,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            seed:         42,
            trials:       100,
            parcel_count: 5,
            start:        "Post Office".to_owned(),
        }
    }
}
