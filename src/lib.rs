//! `bateman` bakes closed-form radioactive decay solutions into static
//! dispatch tables
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use bateman_utils as utils;

#[cfg(feature = "data")]
#[cfg_attr(docsrs, doc(cfg(feature = "data")))]
#[doc(inline)]
pub use bateman_data as data;

#[cfg(feature = "solver")]
#[cfg_attr(docsrs, doc(cfg(feature = "solver")))]
#[doc(inline)]
pub use bateman_solver as solver;

#[cfg(feature = "codegen")]
#[cfg_attr(docsrs, doc(cfg(feature = "codegen")))]
#[doc(inline)]
pub use bateman_codegen as codegen;
