//! Permutation enumeration with best tracking.

use crate::geometry::{DistanceMatrix, ProblemInstance, Tour};
use crate::solver::{SolveResult, TspSolver};
use tracing::debug;

/// Brute-force solver over all `N!` orderings.
///
/// Rotations and reflections are enumerated as distinct tours even though
/// they cost the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl TspSolver for Exhaustive {
    fn solve(&self, problem: &ProblemInstance) -> SolveResult {
        solve_exhaustive(problem)
    }
}

/// Returns a minimum-cost tour found by trying every permutation.
///
/// Permutations are visited in lexicographic order starting from the
/// identity; only a strictly cheaper tour replaces the incumbent, so among
/// equal-cost optima the lexicographically first one is returned.
///
/// # Examples
///
/// ```
/// use u_tsp::exhaustive::solve_exhaustive;
/// use u_tsp::geometry::ProblemInstance;
///
/// let square = ProblemInstance::from_coords(&[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]);
/// let result = solve_exhaustive(&square);
/// assert!((result.cost - 4.0).abs() < 1e-12);
/// assert_eq!(result.tour, vec![0, 2, 1, 3]);
/// ```
pub fn solve_exhaustive(problem: &ProblemInstance) -> SolveResult {
    let n = problem.len();
    let matrix = DistanceMatrix::from_points(problem.points());

    let mut search = Enumeration {
        matrix: &matrix,
        best_tour: problem.identity_tour(),
        best_cost: f64::INFINITY,
        evaluated: 0,
    };

    let mut prefix = Vec::with_capacity(n);
    let mut used = vec![false; n];
    search.enumerate(&mut prefix, &mut used);

    debug!(
        n,
        evaluated = search.evaluated,
        cost = search.best_cost,
        "exhaustive search finished"
    );

    SolveResult {
        tour: search.best_tour,
        cost: search.best_cost,
    }
}

struct Enumeration<'a> {
    matrix: &'a DistanceMatrix,
    best_tour: Tour,
    best_cost: f64,
    evaluated: u64,
}

impl Enumeration<'_> {
    fn enumerate(&mut self, prefix: &mut Vec<usize>, used: &mut [bool]) {
        if prefix.len() == used.len() {
            let cost = self.matrix.tour_cost(prefix);
            self.evaluated += 1;
            if cost < self.best_cost {
                self.best_cost = cost;
                self.best_tour.clone_from(prefix);
            }
            return;
        }

        for city in 0..used.len() {
            if used[city] {
                continue;
            }
            used[city] = true;
            prefix.push(city);
            self.enumerate(prefix, used);
            prefix.pop();
            used[city] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{distance, tour_cost};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_unit_square() {
        let square =
            ProblemInstance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let result = solve_exhaustive(&square);
        assert!((result.cost - 4.0).abs() < 1e-12);
        // Identity is already optimal and enumerated first.
        assert_eq!(result.tour, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_single_point() {
        let problem = ProblemInstance::from_coords(&[(42.0, 17.0)]);
        let result = solve_exhaustive(&problem);
        assert_eq!(result.tour, vec![0]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_two_points_there_and_back() {
        let problem = ProblemInstance::from_coords(&[(1.0, 2.0), (4.0, 6.0)]);
        let result = solve_exhaustive(&problem);
        let d = distance(&problem.points()[0], &problem.points()[1]);
        assert!((result.cost - 2.0 * d).abs() < 1e-12);
        assert_eq!(result.tour, vec![0, 1]);
    }

    #[test]
    fn test_empty_instance() {
        let result = solve_exhaustive(&ProblemInstance::default());
        assert!(result.tour.is_empty());
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_result_is_a_permutation_with_matching_cost() {
        let mut rng = StdRng::seed_from_u64(11);
        let problem = ProblemInstance::random(7, &mut rng);
        let result = solve_exhaustive(&problem);

        let mut sorted = result.tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, problem.identity_tour());
        assert_eq!(result.cost, tour_cost(&result.tour, problem.points()));
    }

    #[test]
    fn test_not_worse_than_identity() {
        let mut rng = StdRng::seed_from_u64(5);
        let problem = ProblemInstance::random(6, &mut rng);
        let identity = tour_cost(&problem.identity_tour(), problem.points());
        assert!(solve_exhaustive(&problem).cost <= identity);
    }

    #[test]
    fn test_solver_trait() {
        let problem = ProblemInstance::from_coords(&[(0.0, 0.0), (2.0, 0.0), (1.0, 3.0)]);
        let via_trait = Exhaustive.solve(&problem);
        assert_eq!(via_trait, solve_exhaustive(&problem));
    }
}
