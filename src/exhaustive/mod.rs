//! Exhaustive search.
//!
//! Scores every permutation of the point indices and keeps the cheapest.
//! Exact but factorial in time: intended for instances of about ten points
//! or fewer. Nothing in the solver enforces that limit.

mod runner;

pub use runner::{solve_exhaustive, Exhaustive};
