//! Closed-form expression synthesis

// bateman crates
use bateman_data::{DecayData, Zam};
use bateman_utils::f;

// external crates
use itertools::Itertools;

use crate::coefficients::chain_coefficients;

/// One `k · exp(a·t)` term of a closed-form solution
///
/// Terms render as generic expression text for the code generator, with the
/// amplitude and rate written in scientific notation so the emitted literal
/// round-trips to the exact `f64` the solver produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Multiplier on the exponential
    pub amplitude: f64,
    /// Exponent rate, the negated decay constant
    pub rate: f64,
}

impl Term {
    /// Evaluate the term at time `t` (s)
    pub fn eval(&self, t: f64) -> f64 {
        self.amplitude * f64::exp(self.rate * t)
    }

    /// Expression text for the term
    ///
    /// A unit amplitude drops the multiplier, and the constant term of a
    /// stable sink collapses to a plain `1.0`.
    ///
    /// ```rust
    /// # use bateman_solver::Term;
    /// let term = Term { amplitude: 0.5, rate: -2.0e-9 };
    /// assert_eq!(term.render(), "5e-1 * f64::exp(-2e-9 * t)");
    ///
    /// let term = Term { amplitude: 1.0, rate: -2.0e-9 };
    /// assert_eq!(term.render(), "f64::exp(-2e-9 * t)");
    ///
    /// let term = Term { amplitude: 1.0, rate: 0.0 };
    /// assert_eq!(term.render(), "1.0");
    /// ```
    pub fn render(&self) -> String {
        if self.amplitude == 1.0 && self.rate == 0.0 {
            "1.0".to_string()
        } else if self.amplitude == 1.0 {
            f!("f64::exp({:e} * t)", self.rate)
        } else {
            f!("{:e} * f64::exp({:e} * t)", self.amplitude, self.rate)
        }
    }
}

/// Closed-form terms for the terminal abundance of one chain
///
/// The exponential-sum solution for the chain's terminal species, given one
/// unit of the head species at `t = 0`. A chain of length one is the
/// trivial decay of the head itself, anything longer goes through the
/// coefficient solver.
///
/// Returns `None` for chains that cannot be represented, see
/// [chain_coefficients].
pub fn chain_terms<D: DecayData>(chain: &[Zam], data: &D) -> Option<Vec<Term>> {
    if chain.len() == 1 {
        let dc = data.decay_const(chain[0])?;
        return Some(vec![Term {
            amplitude: 1.0,
            rate: -dc,
        }]);
    }

    let solution = chain_coefficients(chain, data)?;
    Some(
        solution
            .amplitude
            .iter()
            .zip(&solution.rate)
            .map(|(k, a)| Term {
                amplitude: *k,
                rate: *a,
            })
            .collect(),
    )
}

/// Expression text for a sum of terms, e.g. `"5e-1 * f64::exp(-2e-9 * t) + 1.0"`
pub fn render_terms(terms: &[Term]) -> String {
    terms.iter().map(Term::render).join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bateman_data::{Branch, DecayRecord, Library};

    #[test]
    fn literals_round_trip() {
        let term = Term {
            amplitude: -0.999549,
            rate: -7.629395e-10,
        };

        // the {:e} format must parse back to the identical f64
        let text = term.render();
        let (k, rest) = text.split_once(" * f64::exp(").unwrap();
        let a = rest.strip_suffix(" * t)").unwrap();
        assert_eq!(k.parse::<f64>().unwrap(), term.amplitude);
        assert_eq!(a.parse::<f64>().unwrap(), term.rate);
    }

    #[test]
    fn unit_constant_collapses() {
        // -0.0 rates come from negating a stable decay constant
        let term = Term {
            amplitude: 1.0,
            rate: -0.0,
        };
        assert_eq!(term.render(), "1.0");
    }

    #[test]
    fn trivial_chain_is_self_decay() {
        let h3 = Zam::new(1, 3, 0);
        let library = Library::from_records(vec![DecayRecord {
            nuclide: h3,
            half_life: Some(3.8852e8),
            branches: vec![Branch {
                daughter: Zam::new(2, 3, 0),
                ratio: 1.0,
            }],
            ..Default::default()
        }]);

        let terms = chain_terms(&[h3], &library).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].amplitude, 1.0);
        assert!(terms[0].rate < 0.0);
        assert!((terms[0].eval(0.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn trivial_chain_without_data_is_dropped() {
        let library = Library::from_records(vec![DecayRecord {
            nuclide: Zam::new(1, 6, 0),
            ..Default::default()
        }]);

        assert_eq!(chain_terms(&[Zam::new(1, 6, 0)], &library), None);
    }

    #[test]
    fn sums_join_terms() {
        let terms = [
            Term {
                amplitude: -1.0,
                rate: -2.0e-9,
            },
            Term {
                amplitude: 1.0,
                rate: 0.0,
            },
        ];
        assert_eq!(
            render_terms(&terms),
            "-1e0 * f64::exp(-2e-9 * t) + 1.0"
        );
    }
}
