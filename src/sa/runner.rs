//! Steppable SA engine.
//!
//! The engine never loops on its own: a driver calls [`SaEngine::step`],
//! [`SaEngine::step_batch`] or [`SaEngine::advance`] at whatever cadence it
//! likes and reads the [`SearchState`] back after each call. Every call does
//! a bounded amount of work, so it is safe to drive from a UI timer.

use super::config::SaConfig;
use super::types::{HistorySample, SaProblem, SearchState};
use crate::error::TspError;
use crate::geometry::{ProblemInstance, Tour};
use crate::solver::{SolveResult, TspSolver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Resumable Simulated Annealing over a borrowed problem.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_tsp::geometry::ProblemInstance;
/// use u_tsp::sa::{SaConfig, SaEngine};
///
/// let problem = ProblemInstance::random(10, &mut StdRng::seed_from_u64(1));
/// let config = SaConfig::default().with_max_iterations(500).with_batch_size(100);
/// let mut engine = SaEngine::with_rng(&problem, config, StdRng::seed_from_u64(2)).unwrap();
///
/// while !engine.is_complete() {
///     engine.advance();
/// }
/// assert_eq!(engine.state().history.len(), 500);
/// ```
pub struct SaEngine<'a, P: SaProblem, R = StdRng> {
    problem: &'a P,
    config: SaConfig,
    rng: R,
    state: SearchState<P::Solution>,
}

impl<'a, P: SaProblem> SaEngine<'a, P, StdRng> {
    /// Creates an engine seeded from `config.seed`, or from a random seed
    /// when none is set.
    pub fn new(problem: &'a P, config: SaConfig) -> Result<Self, TspError> {
        let rng = seeded_rng(config.seed);
        Self::with_rng(problem, config, rng)
    }
}

impl<'a, P: SaProblem, R: Rng> SaEngine<'a, P, R> {
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// Fails if the configuration is invalid; no state is built in that case.
    pub fn with_rng(problem: &'a P, config: SaConfig, rng: R) -> Result<Self, TspError> {
        config.validate()?;
        Ok(Self::build(problem, config, rng))
    }

    fn build(problem: &'a P, config: SaConfig, mut rng: R) -> Self {
        let state = initial_state(problem, &config, &mut rng);
        Self {
            problem,
            config,
            rng,
            state,
        }
    }

    /// Takes one iteration, or does nothing once the budget is used up.
    pub fn step(&mut self) -> &SearchState<P::Solution> {
        if !self.is_complete() {
            self.iterate();
        }
        &self.state
    }

    /// Takes up to `count` iterations without exceeding the budget.
    ///
    /// Produces exactly the state that the same number of [`step`](Self::step)
    /// calls would.
    pub fn step_batch(&mut self, count: usize) -> &SearchState<P::Solution> {
        let remaining = self
            .config
            .max_iterations
            .saturating_sub(self.state.iteration);
        let steps = count.min(remaining);
        for _ in 0..steps {
            self.iterate();
        }
        trace!(
            steps,
            iteration = self.state.iteration,
            current_cost = self.state.current_cost,
            best_cost = self.state.best_cost,
            "annealing batch"
        );
        &self.state
    }

    /// Takes one batch of `config.batch_size` iterations.
    pub fn advance(&mut self) -> &SearchState<P::Solution> {
        self.step_batch(self.config.batch_size)
    }

    /// Discards progress and starts again from the initial solution.
    ///
    /// The random stream is not rewound, so the new run differs from the
    /// previous one.
    pub fn reset(&mut self) {
        self.state = initial_state(self.problem, &self.config, &mut self.rng);
    }

    /// Returns `true` once `max_iterations` iterations have been taken.
    pub fn is_complete(&self) -> bool {
        self.state.iteration >= self.config.max_iterations
    }

    /// Fraction of the iteration budget used, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.state.iteration as f64 / self.config.max_iterations as f64
    }

    pub fn state(&self) -> &SearchState<P::Solution> {
        &self.state
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> SearchState<P::Solution> {
        self.state.clone()
    }

    pub fn into_state(self) -> SearchState<P::Solution> {
        self.state
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    pub fn problem(&self) -> &P {
        self.problem
    }

    fn iterate(&mut self) {
        let k = self.state.iteration;
        let temperature = self.config.temperature_at(k);

        let candidate = self.problem.neighbor(&self.state.current, &mut self.rng);
        let current_cost = self.state.current_cost;
        let candidate_cost = self.problem.cost(&candidate);
        let delta = candidate_cost - current_cost;

        // Metropolis acceptance criterion
        let accept = if delta < 0.0 {
            self.state.improving_moves += 1;
            true
        } else {
            self.rng.random::<f64>() < (-delta / temperature).exp()
        };

        if accept {
            self.state.current = candidate;
            self.state.current_cost = candidate_cost;
            self.state.accepted_moves += 1;

            if candidate_cost < self.state.best_cost {
                self.state.best = self.state.current.clone();
                self.state.best_cost = candidate_cost;
            }
        }

        self.state.history.push(HistorySample {
            iteration: k,
            current_cost,
            best_cost: self.state.best_cost,
            temperature,
        });
        self.state.iteration = k + 1;
        self.state.temperature = self.config.temperature_at(k + 1);

        if self.is_complete() {
            debug!(
                iterations = self.state.iteration,
                best_cost = self.state.best_cost,
                accepted = self.state.accepted_moves,
                improving = self.state.improving_moves,
                "annealing complete"
            );
        }
    }
}

fn initial_state<P: SaProblem, R: Rng>(
    problem: &P,
    config: &SaConfig,
    rng: &mut R,
) -> SearchState<P::Solution> {
    let current = problem.initial_solution(rng);
    let current_cost = problem.cost(&current);
    SearchState {
        best: current.clone(),
        best_cost: current_cost,
        current,
        current_cost,
        iteration: 0,
        temperature: config.initial_temperature,
        history: Vec::new(),
        accepted_moves: 0,
        improving_moves: 0,
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Runs an [`SaEngine`] to completion as a one-shot solver.
///
/// Unlike the exact solvers this is a heuristic: the reported tour is the
/// best one the walk visited, not necessarily an optimum.
#[derive(Debug, Clone)]
pub struct Annealing {
    config: SaConfig,
}

impl Annealing {
    /// Creates the solver, rejecting an invalid configuration up front.
    pub fn new(config: SaConfig) -> Result<Self, TspError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Anneals over `problem` and returns the final search state.
    pub fn run(&self, problem: &ProblemInstance) -> SearchState<Tour> {
        let rng = seeded_rng(self.config.seed);
        let mut engine = SaEngine::build(problem, self.config.clone(), rng);
        engine.step_batch(self.config.max_iterations);
        engine.into_state()
    }
}

impl TspSolver for Annealing {
    fn solve(&self, problem: &ProblemInstance) -> SolveResult {
        let state = self.run(problem);
        SolveResult {
            tour: state.best,
            cost: state.best_cost,
        }
    }
}
