//! Capability trait for decay data sources

use std::collections::BTreeSet;

use crate::nuclide::Zam;

/// Physical decay constants for a set of nuclides
///
/// Everything algorithmic queries decay data through this trait, so the
/// chain enumeration and coefficient solving never care whether the numbers
/// come from a persisted [Library](crate::Library), a corrected wrapper, or
/// a test stub.
///
/// ## Why Option?
///
/// Half-lives are unmeasured for plenty of exotic species, and the chain
/// solver needs to tell "no data" apart from "stable". Absent data are the
/// `None` variant; a stable nuclide reports `Some(0.0)` for its decay
/// constant and `Some(f64::INFINITY)` for its half-life.
pub trait DecayData {
    /// Half-life (s), `None` where unmeasured
    fn half_life(&self, nuclide: Zam) -> Option<f64>;

    /// Decay constant `ln2/half_life` (1/s), `None` where unmeasured
    fn decay_const(&self, nuclide: Zam) -> Option<f64>;

    /// Probability that `parent` decays specifically into `daughter`
    ///
    /// Returns 0.0 for any pair that is not a known decay transition.
    fn branch_ratio(&self, parent: Zam, daughter: Zam) -> f64;

    /// Every daughter reachable from `parent` with nonzero probability
    fn decay_children(&self, parent: Zam) -> BTreeSet<Zam>;

    /// Fission product yield of `product` from `parent`, 0.0 by default
    fn fpyield(&self, parent: Zam, product: Zam) -> f64;
}

// Forwarding so providers can be passed around by reference
impl<D: DecayData + ?Sized> DecayData for &D {
    fn half_life(&self, nuclide: Zam) -> Option<f64> {
        (**self).half_life(nuclide)
    }

    fn decay_const(&self, nuclide: Zam) -> Option<f64> {
        (**self).decay_const(nuclide)
    }

    fn branch_ratio(&self, parent: Zam, daughter: Zam) -> f64 {
        (**self).branch_ratio(parent, daughter)
    }

    fn decay_children(&self, parent: Zam) -> BTreeSet<Zam> {
        (**self).decay_children(parent)
    }

    fn fpyield(&self, parent: Zam, product: Zam) -> f64 {
        (**self).fpyield(parent, product)
    }
}
