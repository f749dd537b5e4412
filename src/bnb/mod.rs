//! Branch-and-bound.
//!
//! Exact depth-first search over partial tours anchored at city `0`,
//! pruning any node whose bound is not below the best complete tour found
//! so far. Worst-case time is still exponential; like the exhaustive
//! solver, it runs to completion without yielding.

mod bound;
mod config;
mod runner;

pub use config::{BnbConfig, Bound};
pub use runner::{solve_branch_and_bound, BnbStats, BranchAndBound};
