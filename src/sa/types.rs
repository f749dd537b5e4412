//! Core trait and state types for Simulated Annealing.

use crate::geometry::{tour_cost, ProblemInstance, Tour};
use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The implementor supplies the starting solution, the cost function and
/// the neighbourhood move. [`SaEngine`](super::SaEngine) handles the
/// temperature, the acceptance test and the bookkeeping.
///
/// SA minimizes the cost function.
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbour of the current solution.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}

/// Tours over a point set: start from the identity order and move by
/// swapping two positions.
impl SaProblem for ProblemInstance {
    type Solution = Tour;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Tour {
        self.identity_tour()
    }

    fn cost(&self, tour: &Tour) -> f64 {
        tour_cost(tour, self.points())
    }

    /// Swaps two positions drawn independently from `[0, N)`.
    ///
    /// Drawing the same position twice yields an unchanged tour. Empty tours
    /// are returned as-is without consuming randomness.
    fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let mut next = tour.clone();
        let n = next.len();
        if n == 0 {
            return next;
        }
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        next.swap(a, b);
        next
    }
}

/// One row of the optimization history, recorded per iteration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySample {
    /// Iteration this sample was taken at.
    pub iteration: usize,
    /// Cost of the current solution before the iteration's move.
    pub current_cost: f64,
    /// Best cost after the iteration's move.
    pub best_cost: f64,
    /// Temperature used by the iteration.
    pub temperature: f64,
}

/// Observable state of an annealing run.
///
/// Owned by one engine and only changed by its step operations. Clone it to
/// keep a snapshot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<S> {
    /// Solution the walk currently sits on.
    pub current: S,
    /// Cost of `current`.
    pub current_cost: f64,
    /// Best solution seen so far.
    pub best: S,
    /// Cost of `best`.
    pub best_cost: f64,
    /// Number of iterations taken.
    pub iteration: usize,
    /// Temperature the next iteration will use.
    pub temperature: f64,
    /// One sample per iteration taken, in order.
    pub history: Vec<HistorySample>,
    /// Moves accepted, improving or not.
    pub accepted_moves: usize,
    /// Moves that strictly lowered the current cost.
    pub improving_moves: usize,
}
