//! A pending delivery.

use mf_core::LocationId;

/// A parcel waiting to be delivered.
///
/// `place` is where the parcel currently is: its pickup spot until an agent
/// collects it, then wherever that agent is.  A parcel whose `place` equals
/// its `address` has been delivered and is dropped from the state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub place:   LocationId,
    pub address: LocationId,
}

impl Parcel {
    #[inline]
    pub fn new(place: LocationId, address: LocationId) -> Self {
        Self { place, address }
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }
}
