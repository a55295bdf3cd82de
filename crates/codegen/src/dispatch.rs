//! Dispatch assembly for tracked nuclides

use std::collections::HashMap;

// bateman crates
use bateman_data::{DecayData, Zam};
use bateman_solver::{chain_name, chain_terms, decay_chains, Term};
use bateman_utils::{OptionExt, ValueExt};

// external crates
use log::{debug, info, warn};

/// Complete generation output for a set of tracked nuclides
///
/// The tracked list fixes the output slot for every terminal species, and
/// the element units partition the case logic so that no single dispatch
/// point grows with the whole chart of nuclides. Built once per generation
/// run and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dispatch {
    /// Tracked nuclides, in output slot order
    pub nucs: Vec<Zam>,
    /// One routing unit per element, ascending proton number
    pub elements: Vec<ElementUnit>,
}

/// Case logic for every tracked nuclide of one element
#[derive(Debug, Clone)]
pub struct ElementUnit {
    /// Proton number shared by the cases
    pub z: u32,
    /// Per-nuclide case logic
    pub cases: Vec<Case>,
}

impl ElementUnit {
    /// Lowercase element symbol, e.g. "co", used for function naming
    pub fn symbol(&self) -> String {
        Zam::new(self.z, 0, 0).symbol().to_lowercase()
    }

    /// True if any case needs the elapsed time
    pub fn uses_time(&self) -> bool {
        self.cases
            .iter()
            .flat_map(|case| &case.arms)
            .any(|arm| matches!(arm, Arm::Accumulate { .. }))
    }
}

/// Accumulation statements for one tracked nuclide
#[derive(Debug, Clone)]
pub struct Case {
    /// The nuclide this case handles
    pub nuclide: Zam,
    /// One accumulation per solvable chain
    pub arms: Vec<Arm>,
}

/// A single accumulation into a tracked output slot
#[derive(Debug, Clone)]
pub enum Arm {
    /// Stable species, the input abundance lands in its own slot untouched
    Passthrough {
        /// Output slot of the nuclide itself
        slot: usize,
    },
    /// Closed-form accumulation into a tracked terminal's slot
    Accumulate {
        /// Output slot of the chain's terminal nuclide
        slot: usize,
        /// Exponential-sum solution, scaled by the input abundance
        terms: Vec<Term>,
    },
}

impl Arm {
    /// Output slot this arm accumulates into
    pub fn slot(&self) -> usize {
        match self {
            Arm::Passthrough { slot } => *slot,
            Arm::Accumulate { slot, .. } => *slot,
        }
    }
}

/// Assemble the full dispatch structure for a set of tracked nuclides
///
/// Every tracked nuclide gets a case. Stable species pass their abundance
/// straight through to their own slot. Everything else enumerates its decay
/// chains and accumulates a closed-form expression into the slot of each
/// tracked terminal, so convergent paths into the same terminal sum rather
/// than overwrite.
///
/// Chains ending in untracked species are skipped, and unsolvable chains
/// are dropped with a diagnostic. Neither is an error, the pass-through
/// default in the generated module covers the gaps conservatively.
pub fn build_dispatch<D: DecayData>(nucs: &[Zam], data: &D) -> Dispatch {
    let index: HashMap<Zam, usize> = nucs.iter().enumerate().map(|(i, n)| (*n, i)).collect();

    let mut elements: Vec<ElementUnit> = Vec::new();
    for nuc in nucs {
        let case = build_case(*nuc, &index, data);
        match elements.iter_mut().find(|unit| unit.z == nuc.z()) {
            Some(unit) => unit.cases.push(case),
            None => elements.push(ElementUnit {
                z: nuc.z(),
                cases: vec![case],
            }),
        }
    }
    elements.sort_by_key(|unit| unit.z);

    Dispatch {
        nucs: nucs.to_vec(),
        elements,
    }
}

fn build_case<D: DecayData>(nuc: Zam, index: &HashMap<Zam, usize>, data: &D) -> Case {
    let mut arms = Vec::new();

    // stable nuclides route into their own slot and nothing else
    if data.decay_const(nuc) == Some(0.0) {
        arms.push(Arm::Passthrough { slot: index[&nuc] });
        return Case { nuclide: nuc, arms };
    }

    let chains = decay_chains(nuc, data);
    info!("{}: {} chains", nuc.name(), chains.len());

    for chain in &chains {
        let terminal = chain.last().expect("chains are never empty");
        let Some(&slot) = index.get(terminal) else {
            continue;
        };
        match chain_terms(chain, data) {
            Some(terms) => arms.push(Arm::Accumulate { slot, terms }),
            None => debug!("dropped unsolvable chain {}", chain_name(chain)),
        }
    }

    if arms.is_empty() {
        warn!(
            "{}: no solvable chains, abundance will not be tracked (decay constant {})",
            nuc.name(),
            data.decay_const(nuc).map(|dc| dc.sci(4, 2)).display()
        );
    }

    Case { nuclide: nuc, arms }
}
