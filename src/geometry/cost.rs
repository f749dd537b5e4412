//! Euclidean distance and tour cost.

use super::point::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: &Point, q: &Point) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    (dx * dx + dy * dy).sqrt()
}

/// Total length of `tour` read as a cycle over `points`.
///
/// `tour` must be a permutation of `0..points.len()`; this is not checked.
/// Empty and single-entry tours cost `0.0`.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::{tour_cost, ProblemInstance};
///
/// let square = ProblemInstance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// assert!((tour_cost(&[0, 1, 2, 3], square.points()) - 4.0).abs() < 1e-12);
/// ```
pub fn tour_cost(tour: &[usize], points: &[Point]) -> f64 {
    let n = tour.len();
    let mut total = 0.0;
    for i in 0..n {
        total += distance(&points[tour[i]], &points[tour[(i + 1) % n]]);
    }
    total
}

/// Dense pairwise distance table.
///
/// Entries are computed with [`distance`], so [`DistanceMatrix::tour_cost`]
/// agrees bit for bit with [`tour_cost`] on the same tour.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(&points[i], &points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of points covered.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` if the matrix covers no points.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between points `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Length of the open path visiting `path` in order (no closing edge).
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Cyclic tour length, same summation order as [`tour_cost`].
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        let mut total = 0.0;
        for i in 0..n {
            total += self.get(tour[i], tour[(i + 1) % n]);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ProblemInstance;
    use proptest::prelude::*;

    fn unit_square() -> ProblemInstance {
        ProblemInstance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
    }

    #[test]
    fn test_distance_345() {
        let p = Point::new(0, 0.0, 0.0);
        let q = Point::new(1, 3.0, 4.0);
        assert!((distance(&p, &q) - 5.0).abs() < 1e-12);
        assert!((distance(&q, &p) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_cost_square() {
        let square = unit_square();
        assert!((tour_cost(&[0, 1, 2, 3], square.points()) - 4.0).abs() < 1e-12);
        // Crossing tour: two sides plus two diagonals.
        let crossed = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_cost(&[0, 2, 1, 3], square.points()) - crossed).abs() < 1e-12);
    }

    #[test]
    fn test_tour_cost_degenerate() {
        let one = ProblemInstance::from_coords(&[(5.0, 5.0)]);
        assert_eq!(tour_cost(&[], one.points()), 0.0);
        assert_eq!(tour_cost(&[0], one.points()), 0.0);

        let two = ProblemInstance::from_coords(&[(0.0, 0.0), (3.0, 4.0)]);
        assert!((tour_cost(&[0, 1], two.points()) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_matches_points() {
        let square = unit_square();
        let matrix = DistanceMatrix::from_points(square.points());
        assert_eq!(matrix.len(), 4);
        for tour in [[0, 1, 2, 3], [0, 2, 1, 3], [3, 1, 0, 2]] {
            assert_eq!(matrix.tour_cost(&tour), tour_cost(&tour, square.points()));
        }
        assert_eq!(matrix.get(1, 1), 0.0);
        assert!((matrix.path_cost(&[0, 1, 2]) - 2.0).abs() < 1e-12);
    }

    fn coords_and_tour() -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<usize>)> {
        prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), 1..12).prop_flat_map(|coords| {
            let n = coords.len();
            let tour = Just((0..n).collect::<Vec<usize>>()).prop_shuffle();
            (Just(coords), tour)
        })
    }

    proptest! {
        #[test]
        fn prop_rotation_preserves_cost((coords, tour) in coords_and_tour(), shift in 0usize..12) {
            let problem = ProblemInstance::from_coords(&coords);
            let mut rotated = tour.clone();
            rotated.rotate_left(shift % tour.len());
            let a = tour_cost(&tour, problem.points());
            let b = tour_cost(&rotated, problem.points());
            prop_assert!((a - b).abs() < 1e-9);
        }

        #[test]
        fn prop_reversal_preserves_cost((coords, tour) in coords_and_tour()) {
            let problem = ProblemInstance::from_coords(&coords);
            let mut reversed = tour.clone();
            reversed.reverse();
            let a = tour_cost(&tour, problem.points());
            let b = tour_cost(&reversed, problem.points());
            prop_assert!((a - b).abs() < 1e-9);
        }

        #[test]
        fn prop_cost_is_non_negative((coords, tour) in coords_and_tour()) {
            let problem = ProblemInstance::from_coords(&coords);
            prop_assert!(tour_cost(&tour, problem.points()) >= 0.0);
        }
    }
}
