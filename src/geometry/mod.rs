//! Geometry and cost model.
//!
//! Points live in the Euclidean plane; a tour is a permutation of point
//! indices read as a cycle, and its cost is the total edge length including
//! the closing edge back to the first entry.

mod cost;
mod point;

pub use cost::{distance, tour_cost, DistanceMatrix};
pub use point::{Point, ProblemInstance, Tour, COORDINATE_RANGE};
