//! Depth-first branch-and-bound over partial tours.
//!
//! # Algorithm
//!
//! 1. Start from the partial tour `[0]`; city `0` anchors every tour so
//!    rotations are not enumerated.
//! 2. At a complete tour, score the closed cycle and keep it if strictly
//!    cheaper than the incumbent.
//! 3. Otherwise compute `path length + completion estimate`; if that is not
//!    below the incumbent cost, abandon the node.
//! 4. Branch on every unvisited city in increasing index order.

use super::bound::completion_estimate;
use super::config::{BnbConfig, Bound};
use crate::geometry::{DistanceMatrix, ProblemInstance, Tour};
use crate::solver::{SolveResult, TspSolver};
use tracing::debug;

const ANCHOR: usize = 0;

/// Counters collected during one branch-and-bound search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BnbStats {
    /// Search nodes visited, including complete tours.
    pub nodes_explored: u64,
    /// Nodes abandoned because their bound reached the incumbent cost.
    pub prunings_bound: u64,
    /// Complete tours scored.
    pub solutions_found: u64,
    /// Times the incumbent was replaced by a strictly cheaper tour.
    pub incumbent_updates: u64,
    /// Length of the longest partial tour reached.
    pub max_depth: usize,
}

impl std::fmt::Display for BnbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Branch-and-bound statistics:")?;
        writeln!(f, "  Nodes explored:    {}", self.nodes_explored)?;
        writeln!(f, "  Prunings (bound):  {}", self.prunings_bound)?;
        writeln!(f, "  Solutions found:   {}", self.solutions_found)?;
        writeln!(f, "  Incumbent updates: {}", self.incumbent_updates)?;
        writeln!(f, "  Max depth:         {}", self.max_depth)?;
        Ok(())
    }
}

/// Exact solver pruning partial tours against the incumbent.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::BranchAndBound;
/// use u_tsp::geometry::ProblemInstance;
/// use u_tsp::solver::TspSolver;
///
/// let square = ProblemInstance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// let result = BranchAndBound::default().solve(&square);
/// assert!((result.cost - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchAndBound {
    config: BnbConfig,
}

impl BranchAndBound {
    /// Creates a solver with the given configuration.
    pub fn new(config: BnbConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &BnbConfig {
        &self.config
    }

    /// Solves `problem` and reports search counters alongside the result.
    pub fn solve_with_stats(&self, problem: &ProblemInstance) -> (SolveResult, BnbStats) {
        let n = problem.len();
        if n == 0 {
            return (
                SolveResult {
                    tour: Vec::new(),
                    cost: 0.0,
                },
                BnbStats::default(),
            );
        }

        let matrix = DistanceMatrix::from_points(problem.points());
        let mut search = Search {
            matrix: &matrix,
            bound: self.config.bound,
            best_tour: problem.identity_tour(),
            best_cost: f64::INFINITY,
            stats: BnbStats::default(),
        };

        let mut partial = Vec::with_capacity(n);
        partial.push(ANCHOR);
        let mut visited = vec![false; n];
        visited[ANCHOR] = true;
        search.descend(&mut partial, &mut visited, 0.0);

        debug!(
            n,
            bound = ?self.config.bound,
            nodes = search.stats.nodes_explored,
            pruned = search.stats.prunings_bound,
            cost = search.best_cost,
            "branch-and-bound finished"
        );

        (
            SolveResult {
                tour: search.best_tour,
                cost: search.best_cost,
            },
            search.stats,
        )
    }
}

impl TspSolver for BranchAndBound {
    fn solve(&self, problem: &ProblemInstance) -> SolveResult {
        self.solve_with_stats(problem).0
    }
}

/// Solves `problem` with the default (admissible) bound.
pub fn solve_branch_and_bound(problem: &ProblemInstance) -> SolveResult {
    BranchAndBound::default().solve(problem)
}

struct Search<'a> {
    matrix: &'a DistanceMatrix,
    bound: Bound,
    best_tour: Tour,
    best_cost: f64,
    stats: BnbStats,
}

impl Search<'_> {
    /// `path_len` is the open path length of `partial`.
    fn descend(&mut self, partial: &mut Vec<usize>, visited: &mut [bool], path_len: f64) {
        self.stats.nodes_explored += 1;
        self.stats.max_depth = self.stats.max_depth.max(partial.len());

        let n = visited.len();
        if partial.len() == n {
            self.stats.solutions_found += 1;
            let cost = self.matrix.tour_cost(partial);
            if cost < self.best_cost {
                self.best_cost = cost;
                self.best_tour.clone_from(partial);
                self.stats.incumbent_updates += 1;
            }
            return;
        }

        let last = partial[partial.len() - 1];
        let estimate = completion_estimate(self.bound, self.matrix, last, ANCHOR, visited);
        if path_len + estimate >= self.best_cost {
            self.stats.prunings_bound += 1;
            return;
        }

        for city in 0..n {
            if visited[city] {
                continue;
            }
            visited[city] = true;
            partial.push(city);
            self.descend(partial, visited, path_len + self.matrix.get(last, city));
            partial.pop();
            visited[city] = false;
        }
    }
}
