//! Solvers for small Euclidean Traveling Salesman instances.
//!
//! Three interchangeable strategies over the same point set:
//!
//! - **Exhaustive**: scores every permutation. Exact, factorial time.
//! - **Branch-and-Bound (BnB)**: depth-first search over partial tours with
//!   a spanning-tree bound for pruning. Exact, exponential worst case.
//! - **Simulated Annealing (SA)**: swap-move local search with geometric
//!   cooling and Metropolis acceptance, exposed as a steppable engine with
//!   an observable search state and per-iteration history.
//!
//! # Architecture
//!
//! [`geometry`] holds the point model and the cost function every solver
//! scores tours with. The exact solvers are blocking one-shot calls; the SA
//! engine does bounded work per call and is meant to be driven by an
//! outside loop (a UI timer, a CLI) that decides the pace. Nothing in this
//! crate spawns threads, sleeps, or touches I/O.
//!
//! All randomness is injected, so seeded runs are reproducible.

pub mod bnb;
pub mod error;
pub mod exhaustive;
pub mod geometry;
pub mod sa;
pub mod solver;

pub use error::TspError;
