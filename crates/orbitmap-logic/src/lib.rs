//! Pure orbit map logic.
//!
//! This crate holds everything about the universal orbit map that does not
//! touch a terminal, a file or a process. Functions take plain data and return
//! results, so the `orbitmap` binary is only argument parsing and printing.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | `OrbitError` and the crate `Result` alias |
//! | [`orbit_map`] | Parent/child forest, depth counting, BFS transfer paths |
//! | [`parse`] | `PARENT)CHILD` line parsing and map construction |
//! | [`report`] | Serializable summary of a map for machine-readable output |

pub mod error;
pub mod orbit_map;
pub mod parse;
pub mod report;

pub use error::{OrbitError, Result};
pub use orbit_map::{OrbitMap, DEFAULT_ROOT};
pub use parse::{parse_map, parse_orbit};
pub use report::{MapSummary, TransferSummary};
