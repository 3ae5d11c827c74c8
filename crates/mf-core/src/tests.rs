//! Unit tests for mf-core primitives.

#[cfg(test)]
mod ids {
    use crate::LocationId;

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(LocationId::default(), LocationId::INVALID);
        assert_eq!(LocationId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod rng {
    use rand::RngCore;

    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.inner().next_u64(), b.inner().next_u64());
        }
    }

    #[test]
    fn children_are_reproducible_and_distinct() {
        let mut root_a = SimRng::new(99);
        let mut root_b = SimRng::new(99);
        let mut c0 = root_a.child(0);
        let mut c1 = root_a.child(1);
        let mut d0 = root_b.child(0);
        assert_eq!(c0.inner().next_u64(), d0.inner().next_u64());
        assert_ne!(c0.inner().next_u64(), c1.inner().next_u64());
    }
}

#[cfg(test)]
mod config {
    use crate::TrialConfig;

    #[test]
    fn defaults() {
        let c = TrialConfig::default();
        assert_eq!(c.seed, 42);
        assert_eq!(c.trials, 100);
        assert_eq!(c.parcel_count, 5);
        assert_eq!(c.start, "Post Office");
    }
}
