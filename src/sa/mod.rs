//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with probability
//! `exp(-delta / T)`, and `T` falls geometrically every iteration, so the
//! walk explores early and settles late.
//!
//! Unlike the exact solvers, SA is exposed as a resumable engine: it is
//! advanced one step or one batch at a time by an outside driver, and its
//! [`SearchState`] (current and best tour, per-iteration history) can be
//! read between calls.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::{steps_per_frame, SaConfig, FRAME_RATE};
pub use runner::{Annealing, SaEngine};
pub use types::{HistorySample, SaProblem, SearchState};
