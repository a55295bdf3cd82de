//! Fixed overrides for known defects in evaluated decay data

use std::collections::BTreeSet;

use crate::nuclide::Zam;
use crate::provider::DecayData;

/// Branching ratios replacing known-bad or missing provider answers
///
/// Mostly metastable transitions where evaluations disagree or only carry
/// the complement of the isomeric transition.
const BRANCH_RATIOS: [(Zam, Zam, f64); 12] = [
    (Zam(451040000), Zam(461040000), 0.9955),
    (Zam(451040000), Zam(441040000), 0.0045),
    (Zam(521270000), Zam(531270000), 1.0),
    (Zam(471100001), Zam(471100000), 1.0 - 0.9867),
    (Zam(491190001), Zam(491190000), 1.0 - 0.956),
    (Zam(511260001), Zam(511260000), 0.14),
    (Zam(320770001), Zam(320770000), 0.19),
    (Zam(360850001), Zam(360850000), 1.0 - 0.788),
    (Zam(711770001), Zam(711770000), 0.217),
    (Zam(461110001), Zam(461110000), 0.73),
    (Zam(842110001), Zam(842110000), 0.0002),
    (Zam(521290001), Zam(531290000), 0.63),
];

/// Daughter sets replacing known-bad provider answers
///
/// Rh104 is missing its electron capture branch in some evaluations, and
/// Te127 only ever goes to I127.
const DECAY_CHILDREN: [(Zam, &[Zam]); 2] = [
    (Zam(451040000), &[Zam(441040000), Zam(461040000)]),
    (Zam(521270000), &[Zam(531270000)]),
];

/// Decorator shadowing a provider with the fixed correction tables
///
/// Branching ratio and daughter set queries check the override tables first
/// and fall back to the wrapped provider unchanged. Every other query
/// delegates directly. Pure lookup, no side effects.
///
/// ```rust
/// # use bateman_data::{Corrected, DecayData, Library, Zam};
/// let data = Corrected::new(Library::default());
///
/// // the empty library knows nothing, the override table still answers
/// assert_eq!(data.branch_ratio(Zam(451040000), Zam(461040000)), 0.9955);
/// ```
#[derive(Debug, Clone)]
pub struct Corrected<P> {
    provider: P,
}

impl<P> Corrected<P> {
    /// Wrap a provider with the correction tables
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Access to the wrapped provider
    pub fn inner(&self) -> &P {
        &self.provider
    }
}

impl<P: DecayData> DecayData for Corrected<P> {
    fn half_life(&self, nuclide: Zam) -> Option<f64> {
        self.provider.half_life(nuclide)
    }

    fn decay_const(&self, nuclide: Zam) -> Option<f64> {
        self.provider.decay_const(nuclide)
    }

    fn branch_ratio(&self, parent: Zam, daughter: Zam) -> f64 {
        BRANCH_RATIOS
            .iter()
            .find(|(p, d, _)| *p == parent && *d == daughter)
            .map_or_else(|| self.provider.branch_ratio(parent, daughter), |(_, _, r)| *r)
    }

    fn decay_children(&self, parent: Zam) -> BTreeSet<Zam> {
        DECAY_CHILDREN
            .iter()
            .find(|(p, _)| *p == parent)
            .map_or_else(
                || self.provider.decay_children(parent),
                |(_, children)| children.iter().copied().collect(),
            )
    }

    fn fpyield(&self, parent: Zam, product: Zam) -> f64 {
        self.provider.fpyield(parent, product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answers every query with an obviously wrong sentinel
    struct Sentinel;

    impl DecayData for Sentinel {
        fn half_life(&self, _: Zam) -> Option<f64> {
            Some(999.0)
        }

        fn decay_const(&self, _: Zam) -> Option<f64> {
            Some(999.0)
        }

        fn branch_ratio(&self, _: Zam, _: Zam) -> f64 {
            999.0
        }

        fn decay_children(&self, _: Zam) -> BTreeSet<Zam> {
            BTreeSet::from([Zam(999)])
        }

        fn fpyield(&self, _: Zam, _: Zam) -> f64 {
            999.0
        }
    }

    #[test]
    fn overrides_beat_the_provider() {
        let data = Corrected::new(Sentinel);

        // every pair in the table wins over whatever the provider says
        for (parent, daughter, expected) in BRANCH_RATIOS {
            assert_eq!(data.branch_ratio(parent, daughter), expected);
        }

        for (parent, children) in DECAY_CHILDREN {
            let expected: BTreeSet<Zam> = children.iter().copied().collect();
            assert_eq!(data.decay_children(parent), expected);
        }
    }

    #[test]
    fn everything_else_delegates() {
        let data = Corrected::new(Sentinel);
        let rh104 = Zam(451040000);
        let co60 = Zam::new(27, 60, 0);

        // pairs outside the table fall through to the provider
        assert_eq!(data.branch_ratio(co60, rh104), 999.0);
        assert_eq!(data.decay_children(co60), BTreeSet::from([Zam(999)]));

        // unrelated queries always delegate, even for corrected parents
        assert_eq!(data.half_life(rh104), Some(999.0));
        assert_eq!(data.decay_const(rh104), Some(999.0));
        assert_eq!(data.fpyield(rh104, co60), 999.0);
    }

    #[test]
    fn isomeric_pairs_stay_complementary() {
        let data = Corrected::new(Sentinel);
        let rh104 = Zam(451040000);

        let total: f64 = data
            .decay_children(rh104)
            .iter()
            .map(|child| data.branch_ratio(rh104, *child))
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
