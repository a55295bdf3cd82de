//! Nuclide identity and decay data provision
//!
//! This crate defines who the nuclides are and where their physical constants
//! come from.
//!
//! Decay data are made available by:
//! - Loading a persisted decay [Library] from JSON (recommended)
//! - Implementing the [DecayData] trait over any other source
//!
//! ## Implementation
//!
//! Every nuclide is identified by a canonical [Zam] integer encoding the
//! proton number, mass number, and excitation state. The human-readable
//! [Nuclide] form parses the usual notations and converts to [Zam] for
//! anything algorithmic.
//!
//! ```rust
//! # use bateman_data::{Nuclide, Zam};
//! # use std::str::FromStr;
//! let nuclide = Nuclide::from_str("ag110m1").unwrap();
//! assert_eq!(nuclide.zam().unwrap(), Zam::new(47, 110, 1));
//! ```
//!
//! All physical constants are queried through the [DecayData] capability
//! trait so that the solver never cares where the numbers came from. The
//! [Corrected] decorator shadows a handful of known-bad branching ratios and
//! daughter sets with fixed overrides before delegating to the wrapped
//! provider.
//!
//! ```rust, no_run
//! # use bateman_data::{Corrected, Library};
//! let library = Library::from_json_file("decay_data.json").unwrap();
//! let seeds = library.seed_nuclides();
//! let data = Corrected::new(library);
//! ```

// Modules
mod corrections;
mod error;
mod library;
mod nuclide;
mod parsers;
mod provider;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use corrections::Corrected;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use library::{Branch, DecayRecord, FissionYield, Library};

#[doc(inline)]
pub use nuclide::{IsomerState, Nuclide, Zam};

#[doc(inline)]
pub use provider::DecayData;
