//! Analytic Bateman coefficient solver

// standard library
use std::f64::consts::LN_2;

// bateman crates
use bateman_data::{DecayData, Zam};

// external crates
use itertools::Itertools;
use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::chain::chain_name;

/// Decay constants (1/s) below this rate are treated as stable
///
/// An exact zero test would miss float noise from `ln2/half_life` on
/// half-lives up in the 1e+17 year range of "observationally stable"
/// species.
pub const STABLE_CUTOFF: f64 = 1.0e-16;

/// Relative half-life contribution below which a term is negligible
///
/// Dropping these terms bounds the size of the generated expressions. The
/// species still get picked up in their own chains, so the trade is
/// fidelity of the tail against generated code size, not correctness.
pub const PRUNE_CUTOFF: f64 = 1.0e-8;

/// Pruning never reduces a solution below this many terms
const MIN_TERMS: usize = 2;

/// Amplitude/rate pairs of one closed-form Bateman solution
///
/// The fractional abundance of the chain's terminal species at time `t`,
/// given one unit of the head species at `t = 0`, is
/// `Σ amplitude[i] · exp(rate[i] · t)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    /// Term amplitudes, scaled by the chain's aggregate branching ratio
    pub amplitude: Vec<f64>,
    /// Term rates, the negated decay constants
    pub rate: Vec<f64>,
}

impl Coefficients {
    /// Number of exponential terms
    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    /// A solution can never be empty, but clippy insists
    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }
}

/// Solve one chain for its closed-form coefficients
///
/// Returns `None` for any chain the solver cannot represent:
///
/// - a member's half-life is unmeasured, so the system is underdetermined
/// - two decay constants are close enough that the pairwise ratios blow up
/// - the aggregate branching probability along the chain is zero
///
/// None of these are errors. The chain is a coverage gap and the caller is
/// expected to drop it.
///
/// ```rust
/// # use bateman_data::{Branch, DecayRecord, Library, Zam};
/// # use bateman_solver::chain_coefficients;
/// # let sr90 = Zam::new(38, 90, 0);
/// # let y90 = Zam::new(39, 90, 0);
/// # let library = Library::from_records(vec![
/// #     DecayRecord {
/// #         nuclide: sr90,
/// #         half_life: Some(9.085e8),
/// #         branches: vec![Branch { daughter: y90, ratio: 1.0 }],
/// #         ..Default::default()
/// #     },
/// #     DecayRecord { nuclide: y90, stable: true, ..Default::default() },
/// # ]);
/// let solution = chain_coefficients(&[sr90, y90], &library).unwrap();
/// assert_eq!(solution.len(), 2);
/// ```
pub fn chain_coefficients<D: DecayData>(chain: &[Zam], data: &D) -> Option<Coefficients> {
    let n = chain.len();
    let dc: Vec<f64> = chain
        .iter()
        .map(|nuc| data.decay_const(*nuc))
        .collect::<Option<_>>()?;
    let dc = DVector::from_vec(dc);
    let ends_stable = dc[n - 1] < STABLE_CUTOFF;

    // pairwise rate ratios, with the identity diagonal fixed to unity
    let mut ratios = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            1.0
        } else {
            dc[i] / (dc[i] - dc[j])
        }
    });

    // a chain ending in a non-decaying sink replaces the terminal row
    if ends_stable {
        for j in 0..n - 1 {
            ratios[(n - 1, j)] = -1.0 / dc[j];
        }
    }

    // per-term coefficient is the product down each column
    let products: Vec<f64> = (0..n).map(|j| ratios.column(j).product()).collect();

    let mut amplitude: Vec<f64> = if ends_stable {
        let mut k: Vec<f64> = (0..n).map(|j| dc[j] * products[j]).collect();
        // in the stable limit the constant term is the asymptotic accumulation
        k[n - 1] = 1.0;
        k
    } else {
        (0..n).map(|j| (dc[j] / dc[n - 1]) * products[j]).collect()
    };

    // near-degenerate decay constants blow the ratio products up
    if amplitude.iter().any(|k| !k.is_finite()) {
        debug!("degenerate rates in {}", chain_name(chain));
        return None;
    }

    let gamma: f64 = chain
        .iter()
        .tuple_windows()
        .map(|(parent, daughter)| data.branch_ratio(*parent, *daughter))
        .product();
    if gamma == 0.0 {
        return None;
    }
    for k in &mut amplitude {
        *k *= gamma;
    }

    let rate: Vec<f64> = dc.iter().map(|d| -d).collect();

    // half-lives feed the pruning mask, falling back to ln2/λ where a
    // provider only carries rates
    let half_lives: Vec<f64> = chain
        .iter()
        .zip(dc.iter())
        .map(|(nuc, d)| data.half_life(*nuc).unwrap_or(LN_2 / d))
        .collect();

    Some(prune(Coefficients { amplitude, rate }, &half_lives, ends_stable))
}

/// Drop terms from species with negligible half-lives
///
/// Negligible is relative to the summed half-life of the chain, with the
/// infinite half-life of a stable sink excluded from the sum and its term
/// always kept. If fewer than [MIN_TERMS] would survive, the full set is
/// returned untouched.
fn prune(solution: Coefficients, half_lives: &[f64], ends_stable: bool) -> Coefficients {
    let decaying = if ends_stable {
        &half_lives[..half_lives.len() - 1]
    } else {
        half_lives
    };

    let total: f64 = decaying.iter().sum();
    let mut keep: Vec<bool> = decaying.iter().map(|hl| hl / total > PRUNE_CUTOFF).collect();
    if ends_stable {
        keep.push(true);
    }

    if keep.iter().filter(|kept| **kept).count() < MIN_TERMS {
        return solution;
    }

    let filter = |values: &[f64]| -> Vec<f64> {
        values
            .iter()
            .zip(&keep)
            .filter(|(_, kept)| **kept)
            .map(|(value, _)| *value)
            .collect()
    };

    Coefficients {
        amplitude: filter(&solution.amplitude),
        rate: filter(&solution.rate),
    }
}
