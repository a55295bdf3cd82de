//! Decay chain enumeration and analytic Bateman solutions
//!
//! This crate does the physics. Given a [DecayData](bateman_data::DecayData)
//! source it will:
//!
//! - enumerate every decay chain rooted at a nuclide ([decay_chains])
//! - solve the Bateman equations for a chain analytically
//!   ([chain_coefficients])
//! - synthesize the solution as closed-form exponential terms
//!   ([chain_terms])
//!
//! The abundance of a chain's terminal species at time `t`, starting from
//! one unit of the head species, is the exponential sum
//!
//! ```text
//! N(t) = Σ k_i · exp(a_i · t)
//! ```
//!
//! where the amplitudes `k_i` and rates `a_i` come straight out of the
//! coefficient solver. Chains the solver cannot represent, because a
//! half-life is unmeasured, the rates are numerically degenerate, or the
//! aggregate branching probability is zero, simply return `None` and are
//! left out of the generated dispatch.
//!
//! ```rust
//! # use bateman_data::{Branch, DecayRecord, Library, Zam};
//! # use bateman_solver::{chain_terms, decay_chains};
//! let h3 = Zam::new(1, 3, 0);
//! let he3 = Zam::new(2, 3, 0);
//! let library = Library::from_records(vec![
//!     DecayRecord {
//!         nuclide: h3,
//!         half_life: Some(3.8852e8),
//!         branches: vec![Branch { daughter: he3, ratio: 1.0 }],
//!         ..Default::default()
//!     },
//!     DecayRecord { nuclide: he3, stable: true, ..Default::default() },
//! ]);
//!
//! // tritium has exactly two chains: itself, and the decay to helium-3
//! let chains = decay_chains(h3, &library);
//! assert_eq!(chains.len(), 2);
//!
//! // the helium-3 abundance grows as 1 - exp(-λt)
//! let terms = chain_terms(&[h3, he3], &library).unwrap();
//! assert!((terms[0].amplitude + 1.0).abs() < 1e-12);
//! assert_eq!(terms[1].amplitude, 1.0);
//! ```

// Modules
mod chain;
mod coefficients;
mod expression;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use chain::{chain_name, decay_chains, Chain};

#[doc(inline)]
pub use coefficients::{chain_coefficients, Coefficients, PRUNE_CUTOFF, STABLE_CUTOFF};

#[doc(inline)]
pub use expression::{chain_terms, render_terms, Term};
