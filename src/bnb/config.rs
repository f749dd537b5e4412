//! Branch-and-bound configuration.

/// Completion estimate used to prune partial tours.
///
/// A partial tour `[0, .., last]` still has to visit every unvisited city
/// and return to city `0`. The bound of a node is the length of the path so
/// far plus one of these estimates of that remaining work.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound {
    /// Weight of a minimum spanning tree over the last city, the unvisited
    /// cities and the anchor.
    ///
    /// Every completion is a Hamiltonian path over exactly those nodes and
    /// therefore a spanning tree of them, so the estimate never exceeds the
    /// true completion cost. Pruning with it is exact.
    #[default]
    SpanningTree,

    /// Greedy nearest-neighbour walk from the last city through all
    /// unvisited cities, ignoring the closing edge.
    ///
    /// This is a heuristic, not a lower bound: a greedy walk can be longer
    /// than the optimal completion, in which case the branch holding the
    /// optimum may be pruned. Kept for reproducing results of earlier
    /// versions of the solver.
    NearestNeighbor,
}

/// Configuration for [`BranchAndBound`](super::BranchAndBound).
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::{BnbConfig, Bound};
///
/// let config = BnbConfig::default().with_bound(Bound::NearestNeighbor);
/// assert_eq!(config.bound, Bound::NearestNeighbor);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BnbConfig {
    /// Completion estimate used for pruning.
    pub bound: Bound,
}

impl BnbConfig {
    /// Sets the completion estimate.
    pub fn with_bound(mut self, bound: Bound) -> Self {
        self.bound = bound;
        self
    }
}
