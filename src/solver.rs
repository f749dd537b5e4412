//! Common solver interface.
//!
//! All three strategies can be driven through [`TspSolver`], which lets a
//! caller pick one at runtime by [`SolverKind`]. The SA engine additionally
//! offers its steppable API in [`crate::sa`].

use crate::bnb::BranchAndBound;
use crate::error::TspError;
use crate::exhaustive::Exhaustive;
use crate::geometry::{ProblemInstance, Tour};
use crate::sa::{Annealing, SaConfig};
use std::fmt;
use std::str::FromStr;

/// A tour and its cost.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub tour: Tour,
    pub cost: f64,
}

/// A strategy that turns a problem into a tour in one blocking call.
///
/// Exact solvers may run for a long time on larger instances and never
/// yield; run them off any latency-sensitive thread.
pub trait TspSolver {
    /// Solves `problem`. The problem is never modified.
    fn solve(&self, problem: &ProblemInstance) -> SolveResult;
}

/// Selectable solving strategies.
///
/// # Examples
///
/// ```
/// use u_tsp::solver::SolverKind;
///
/// let kind: SolverKind = "branch-and-bound".parse().unwrap();
/// assert_eq!(kind, SolverKind::BranchAndBound);
/// assert_eq!(kind.to_string(), "branch-and-bound");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolverKind {
    #[default]
    SimulatedAnnealing,
    BruteForce,
    BranchAndBound,
}

impl SolverKind {
    pub const ALL: [SolverKind; 3] = [
        SolverKind::SimulatedAnnealing,
        SolverKind::BruteForce,
        SolverKind::BranchAndBound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SolverKind::SimulatedAnnealing => "simulated-annealing",
            SolverKind::BruteForce => "brute-force",
            SolverKind::BranchAndBound => "branch-and-bound",
        }
    }

    /// Returns `true` for the strategies guaranteed to return an optimum.
    pub fn is_exact(&self) -> bool {
        !matches!(self, SolverKind::SimulatedAnnealing)
    }

    /// Builds a solver of this kind.
    ///
    /// `sa_config` is only used (and only validated) for
    /// [`SolverKind::SimulatedAnnealing`].
    pub fn build(&self, sa_config: &SaConfig) -> Result<Box<dyn TspSolver>, TspError> {
        Ok(match self {
            SolverKind::SimulatedAnnealing => Box::new(Annealing::new(sa_config.clone())?),
            SolverKind::BruteForce => Box::new(Exhaustive),
            SolverKind::BranchAndBound => Box::new(BranchAndBound::default()),
        })
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverKind {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolverKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TspError::UnknownSolver(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tour_cost;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_roundtrip_names() {
        for kind in SolverKind::ALL {
            assert_eq!(kind.as_str().parse::<SolverKind>(), Ok(kind));
        }
        assert_eq!(" Brute-Force ".parse::<SolverKind>(), Ok(SolverKind::BruteForce));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "genetic".parse::<SolverKind>(),
            Err(TspError::UnknownSolver("genetic".into()))
        );
    }

    #[test]
    fn test_exactness() {
        assert!(!SolverKind::SimulatedAnnealing.is_exact());
        assert!(SolverKind::BruteForce.is_exact());
        assert!(SolverKind::BranchAndBound.is_exact());
    }

    #[test]
    fn test_build_rejects_bad_sa_config_only_for_sa() {
        let bad = SaConfig::default().with_cooling_rate(2.0);
        assert!(SolverKind::SimulatedAnnealing.build(&bad).is_err());
        assert!(SolverKind::BruteForce.build(&bad).is_ok());
        assert!(SolverKind::BranchAndBound.build(&bad).is_ok());
    }

    #[test]
    fn test_all_solvers_through_trait() {
        let problem = ProblemInstance::random(6, &mut StdRng::seed_from_u64(8));
        let config = SaConfig::default().with_seed(1);

        let exact = SolverKind::BruteForce.build(&config).unwrap().solve(&problem);
        for kind in SolverKind::ALL {
            let result = kind.build(&config).unwrap().solve(&problem);
            assert_eq!(result.tour.len(), 6);
            assert_eq!(result.cost, tour_cost(&result.tour, problem.points()));
            if kind.is_exact() {
                assert!((result.cost - exact.cost).abs() < 1e-9, "{kind}");
            } else {
                assert!(result.cost >= exact.cost - 1e-9);
            }
        }
    }

    #[test]
    fn test_degenerate_instances_through_trait() {
        let config = SaConfig::default().with_seed(3);
        let single = ProblemInstance::from_coords(&[(12.0, 34.0)]);
        for kind in SolverKind::ALL {
            let result = kind.build(&config).unwrap().solve(&single);
            assert_eq!(result.tour, vec![0], "{kind}");
            assert_eq!(result.cost, 0.0, "{kind}");
        }
    }
}
