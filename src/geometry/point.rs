//! Points and problem instances.

use crate::error::TspError;
use rand::Rng;

/// A visiting order over point indices, read as a cycle.
pub type Tour = Vec<usize>;

/// Half-open range that generated coordinates are drawn from.
pub const COORDINATE_RANGE: std::ops::Range<f64> = 0.0..100.0;

/// A city in the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Index of the point within its instance; doubles as the tour entry.
    pub id: usize,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Display name. Not used by any solver.
    pub label: String,
}

impl Point {
    /// Creates a point labelled `"City {id + 1}"`.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            label: format!("City {}", id + 1),
        }
    }

    /// Replaces the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// An immutable set of points to be toured.
///
/// Identifiers are exactly `0..N` in order, so `points()[i].id == i` and a
/// tour can index the slice directly.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::ProblemInstance;
///
/// let problem = ProblemInstance::from_coords(&[(0.0, 0.0), (3.0, 4.0)]);
/// assert_eq!(problem.len(), 2);
/// assert_eq!(problem.points()[1].label, "City 2");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProblemInstance {
    points: Vec<Point>,
}

impl ProblemInstance {
    /// Builds an instance after checking ids and coordinates.
    pub fn new(points: Vec<Point>) -> Result<Self, TspError> {
        for (index, point) in points.iter().enumerate() {
            if point.id != index {
                return Err(TspError::MismatchedId {
                    index,
                    id: point.id,
                });
            }
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(TspError::NonFiniteCoordinate { id: point.id });
            }
        }
        Ok(Self { points })
    }

    /// Builds an instance from raw coordinates, numbering points in order.
    ///
    /// Coordinates are trusted to be finite.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let points = coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Point::new(id, x, y))
            .collect();
        Self { points }
    }

    /// Generates `n` points with both coordinates uniform in
    /// [`COORDINATE_RANGE`].
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let points = (0..n)
            .map(|id| {
                let x = rng.random_range(COORDINATE_RANGE);
                let y = rng.random_range(COORDINATE_RANGE);
                Point::new(id, x, y)
            })
            .collect();
        Self { points }
    }

    /// The points, indexed by id.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` for the degenerate empty instance.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The tour `[0, 1, ..., N-1]`.
    pub fn identity_tour(&self) -> Tour {
        (0..self.points.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_accepts_ordered_ids() {
        let points = vec![Point::new(0, 1.0, 2.0), Point::new(1, 3.0, 4.0)];
        let problem = ProblemInstance::new(points).unwrap();
        assert_eq!(problem.len(), 2);
        assert_eq!(problem.identity_tour(), vec![0, 1]);
    }

    #[test]
    fn test_new_rejects_out_of_order_ids() {
        let points = vec![Point::new(1, 0.0, 0.0), Point::new(0, 1.0, 1.0)];
        assert_eq!(
            ProblemInstance::new(points),
            Err(TspError::MismatchedId { index: 0, id: 1 })
        );
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let points = vec![Point::new(0, 0.0, 0.0), Point::new(1, f64::NAN, 1.0)];
        assert_eq!(
            ProblemInstance::new(points),
            Err(TspError::NonFiniteCoordinate { id: 1 })
        );
    }

    #[test]
    fn test_random_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let problem = ProblemInstance::random(25, &mut rng);
        assert_eq!(problem.len(), 25);
        for (i, p) in problem.points().iter().enumerate() {
            assert_eq!(p.id, i);
            assert!(COORDINATE_RANGE.contains(&p.x));
            assert!(COORDINATE_RANGE.contains(&p.y));
            assert_eq!(p.label, format!("City {}", i + 1));
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = ProblemInstance::random(10, &mut StdRng::seed_from_u64(3));
        let b = ProblemInstance::random(10, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_instance() {
        let problem = ProblemInstance::default();
        assert!(problem.is_empty());
        assert!(problem.identity_tour().is_empty());
    }

    #[test]
    fn test_with_label() {
        let p = Point::new(4, 0.0, 0.0).with_label("Depot");
        assert_eq!(p.label, "Depot");
        assert_eq!(p.id, 4);
    }
}
