//! Decay chain enumeration

// bateman crates
use bateman_data::{DecayData, Zam};

// external crates
use itertools::Itertools;
use log::{debug, warn};

/// Ordered decay path from a head nuclide down to some descendant
pub type Chain = Vec<Zam>;

/// Hard stop for pathological decay graphs
///
/// The longest physical chains (the actinide series) sit well under twenty
/// nuclides, so anything reaching this length means the termination rules
/// have failed on the input data.
const MAX_CHAIN_LENGTH: usize = 32;

/// Collect every decay chain rooted at `seed`
///
/// Chains are grown depth-first: each chain is extended by every decay
/// child of its last nuclide, and expansion stops naturally once a nuclide
/// has no further daughters. Every intermediate path is itself a chain in
/// the result, so a three-step decay contributes three chains.
///
/// Two classes of daughter are not followed:
///
/// - anything with a nonzero fission product yield from the current
///   terminal, which cuts paths re-entering heavy-nuclide territory through
///   fission
/// - anything already present in the chain, since the fission cut is a
///   heuristic rather than a termination proof
///
/// Duplicate chains from convergent decay paths are tolerated. Their
/// contributions are additive, so they only ever double-count real physics.
///
/// ```rust
/// # use bateman_data::{Branch, DecayRecord, Library, Zam};
/// # use bateman_solver::decay_chains;
/// # let h3 = Zam::new(1, 3, 0);
/// # let library = Library::from_records(vec![DecayRecord {
/// #     nuclide: h3,
/// #     half_life: Some(3.8852e8),
/// #     branches: vec![Branch { daughter: Zam::new(2, 3, 0), ratio: 1.0 }],
/// #     ..Default::default()
/// # }]);
/// let chains = decay_chains(h3, &library);
/// assert_eq!(chains[0], vec![h3]);
/// ```
pub fn decay_chains<D: DecayData>(seed: Zam, data: &D) -> Vec<Chain> {
    let mut chains: Vec<Chain> = vec![vec![seed]];
    let mut unexpanded: Vec<usize> = vec![0];

    while let Some(idx) = unexpanded.pop() {
        let chain = chains[idx].clone();
        let parent = *chain.last().expect("chains are never empty");

        if chain.len() == MAX_CHAIN_LENGTH {
            warn!(
                "chain from {seed} cut at {MAX_CHAIN_LENGTH} nuclides: {}",
                chain_name(&chain)
            );
            continue;
        }

        for daughter in data.decay_children(parent) {
            // fission re-entry is out of scope for a pure decay solution
            if data.fpyield(parent, daughter) != 0.0 {
                continue;
            }

            if chain.contains(&daughter) {
                debug!("decay cycle at {parent} -> {daughter} not followed");
                continue;
            }

            let mut extended = chain.clone();
            extended.push(daughter);
            chains.push(extended);
            unexpanded.push(chains.len() - 1);
        }
    }

    chains
}

/// Readable form of a chain for diagnostics, e.g. "Sr90 -> Y90 -> Zr90"
pub fn chain_name(chain: &[Zam]) -> String {
    chain.iter().map(Zam::name).join(" -> ")
}
