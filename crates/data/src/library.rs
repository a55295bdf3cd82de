//! Persisted decay data library

use std::collections::{BTreeSet, HashMap};
use std::f64::consts::LN_2;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::nuclide::Zam;
use crate::provider::DecayData;

/// A single decay transition with its probability
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Branch {
    /// Daughter produced by this decay mode
    pub daughter: Zam,
    /// Probability of this transition among all decay modes
    pub ratio: f64,
}

/// Fission product yield entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FissionYield {
    /// Fission fragment
    pub product: Zam,
    /// Probability that `product` arises as a fragment
    pub yield_frac: f64,
}

/// Everything the library knows about one nuclide
///
/// JSON has no representation for an infinite half-life, so stability is an
/// explicit flag rather than a magic number. Unmeasured half-lives stay
/// `None` for absolute transparency about what the evaluation actually
/// contains.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct DecayRecord {
    /// Canonical identifier
    pub nuclide: Zam,
    /// Half-life (s), `None` where unmeasured
    pub half_life: Option<f64>,
    /// Species with no observed decay
    pub stable: bool,
    /// Excitation level for metastable species, 0 for ground states
    pub metastable: u8,
    /// Decay transitions with nonzero probability
    pub branches: Vec<Branch>,
    /// Fission product yields, where fission data exist
    pub fission_yields: Vec<FissionYield>,
}

/// A complete persisted decay data evaluation
///
/// The library is the canonical [DecayData] implementation, deserialised
/// once from a JSON array of [DecayRecord]s and queried read-only for the
/// rest of the generation run.
///
/// ```rust, no_run
/// # use bateman_data::{DecayData, Library, Zam};
/// let library = Library::from_json_file("decay_data.json").unwrap();
/// let tritium = library.decay_const(Zam::new(1, 3, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Library {
    records: HashMap<Zam, DecayRecord>,
}

impl Library {
    /// Read a library from a JSON array of records
    ///
    /// The `path` takes anything that can be turned into a `Path` reference,
    /// such as a [&str], [String], [Path], etc...
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let records: Vec<DecayRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Build a library directly from records
    pub fn from_records(records: Vec<DecayRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.nuclide, r)).collect(),
        }
    }

    /// Full record for a nuclide, if the library has one
    pub fn record(&self, nuclide: Zam) -> Option<&DecayRecord> {
        self.records.get(&nuclide)
    }

    /// Number of nuclides in the library
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check for an empty library
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Default generation scope: stable and metastable species
    ///
    /// Anything without a defined decay constant is excluded since no chain
    /// rooted at it could ever be solved. Sorted ascending by identifier so
    /// that output slot ordering is reproducible between runs.
    pub fn seed_nuclides(&self) -> Vec<Zam> {
        let mut seeds: Vec<Zam> = self
            .records
            .values()
            .filter(|r| r.stable || r.metastable > 0)
            .map(|r| r.nuclide)
            .filter(|nuc| self.decay_const(*nuc).is_some())
            .collect();
        seeds.sort();
        seeds
    }
}

impl DecayData for Library {
    fn half_life(&self, nuclide: Zam) -> Option<f64> {
        let record = self.record(nuclide)?;
        if record.stable {
            Some(f64::INFINITY)
        } else {
            record.half_life
        }
    }

    fn decay_const(&self, nuclide: Zam) -> Option<f64> {
        let record = self.record(nuclide)?;
        if record.stable {
            Some(0.0)
        } else {
            record.half_life.map(|hl| LN_2 / hl)
        }
    }

    fn branch_ratio(&self, parent: Zam, daughter: Zam) -> f64 {
        self.record(parent)
            .and_then(|r| r.branches.iter().find(|b| b.daughter == daughter))
            .map_or(0.0, |b| b.ratio)
    }

    fn decay_children(&self, parent: Zam) -> BTreeSet<Zam> {
        self.record(parent)
            .map(|r| r.branches.iter().map(|b| b.daughter).collect())
            .unwrap_or_default()
    }

    fn fpyield(&self, parent: Zam, product: Zam) -> f64 {
        self.record(parent)
            .and_then(|r| r.fission_yields.iter().find(|y| y.product == product))
            .map_or(0.0, |y| y.yield_frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tritium_library() -> Library {
        Library::from_records(vec![
            DecayRecord {
                nuclide: Zam::new(1, 3, 0),
                half_life: Some(3.8852e8),
                branches: vec![Branch {
                    daughter: Zam::new(2, 3, 0),
                    ratio: 1.0,
                }],
                ..Default::default()
            },
            DecayRecord {
                nuclide: Zam::new(2, 3, 0),
                stable: true,
                ..Default::default()
            },
        ])
    }

    #[test]
    fn decay_constants() {
        let library = tritium_library();
        let h3 = library.decay_const(Zam::new(1, 3, 0)).unwrap();
        assert!((h3 - LN_2 / 3.8852e8).abs() < 1e-30);

        // stable species decay at exactly zero rate
        assert_eq!(library.decay_const(Zam::new(2, 3, 0)), Some(0.0));
        assert_eq!(library.half_life(Zam::new(2, 3, 0)), Some(f64::INFINITY));

        // unknown species have no data at all
        assert_eq!(library.decay_const(Zam::new(1, 6, 0)), None);
    }

    #[test]
    fn branching_queries() {
        let library = tritium_library();
        let h3 = Zam::new(1, 3, 0);
        let he3 = Zam::new(2, 3, 0);

        assert_eq!(library.branch_ratio(h3, he3), 1.0);
        assert_eq!(library.branch_ratio(he3, h3), 0.0);
        assert_eq!(library.decay_children(h3).len(), 1);
        assert!(library.decay_children(he3).is_empty());
    }

    #[test]
    fn seed_selection() {
        let mut records = vec![
            DecayRecord {
                nuclide: Zam::new(2, 3, 0),
                stable: true,
                ..Default::default()
            },
            // metastable with a measured half-life is a seed
            DecayRecord {
                nuclide: Zam::new(47, 110, 1),
                half_life: Some(2.16e7),
                metastable: 1,
                ..Default::default()
            },
            // metastable with no half-life cannot seed solvable chains
            DecayRecord {
                nuclide: Zam::new(49, 119, 1),
                metastable: 1,
                ..Default::default()
            },
            // unstable ground states only ever appear inside chains
            DecayRecord {
                nuclide: Zam::new(1, 3, 0),
                half_life: Some(3.8852e8),
                ..Default::default()
            },
        ];
        records.rotate_left(1);

        let library = Library::from_records(records);
        assert_eq!(
            library.seed_nuclides(),
            vec![Zam::new(2, 3, 0), Zam::new(47, 110, 1)]
        );
    }

    #[test]
    fn json_round_trip() {
        let h3 = DecayRecord {
            nuclide: Zam::new(1, 3, 0),
            half_life: Some(3.8852e8),
            branches: vec![Branch {
                daughter: Zam::new(2, 3, 0),
                ratio: 1.0,
            }],
            ..Default::default()
        };

        let text = serde_json::to_string(&vec![h3.clone()]).unwrap();
        let parsed: Vec<DecayRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![h3]);
    }
}
