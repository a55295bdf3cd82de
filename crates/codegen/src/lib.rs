//! Static decay dispatch assembly and module generation
//!
//! The final stage of generation. Tracked nuclides are assembled into a
//! [Dispatch] structure, one case per nuclide grouped into one unit per
//! element, and rendered as a self-contained Rust module.
//!
//! ## The generated artifact
//!
//! The emitted module exposes three things:
//!
//! - `NUC_COUNT`, the number of tracked nuclides
//! - `ALL_NUCS`, the tracked identifiers in fixed output slot order
//! - `decay(comp, t)`, a pure function decaying a composition map over `t`
//!   seconds
//!
//! Routing is two-level: an outer `match` on the proton number selects a
//! per-element function, and an inner `match` on the full identifier selects
//! the nuclide case. Species without a case pass through unchanged, so the
//! generated code has no failure mode of any kind.
//!
//! ## Example
//!
//! ```rust, no_run
//! # use bateman_codegen::{build_dispatch, write_module};
//! # use bateman_data::{Corrected, Library};
//! let library = Library::from_json_file("decay_data.json").unwrap();
//! let seeds = library.seed_nuclides();
//!
//! let dispatch = build_dispatch(&seeds, &Corrected::new(&library));
//! write_module(&dispatch, "decay.rs").unwrap();
//! ```

// Modules
mod dispatch;
mod error;
mod render;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use dispatch::{build_dispatch, Arm, Case, Dispatch, ElementUnit};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use render::{render_module, write_module};
