//! Heuristics module for city tours.
//!
//! This module exports the perturbation operators and the local search built on them.

pub mod perturbation;
pub mod local_search;

pub use perturbation::*;
pub use local_search::*;
