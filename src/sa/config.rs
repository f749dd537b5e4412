//! SA configuration and the geometric cooling schedule.

use crate::error::TspError;

/// Frame rate the interactive driver is assumed to tick at.
pub const FRAME_RATE: u32 = 30;

/// Number of SA steps to run per driver frame for an animation speed
/// given in steps per second.
///
/// Always at least one step, so a running driver makes progress.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::steps_per_frame;
///
/// assert_eq!(steps_per_frame(500), 17);
/// assert_eq!(steps_per_frame(5), 1);
/// assert_eq!(steps_per_frame(0), 1);
/// ```
pub fn steps_per_frame(speed: u32) -> usize {
    speed.div_ceil(FRAME_RATE).max(1) as usize
}

/// Configuration for the Simulated Annealing engine.
///
/// Temperature follows `T_k = initial_temperature * cooling_rate^k` and the
/// run is complete once `max_iterations` steps have been taken.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(800.0)
///     .with_cooling_rate(0.99)
///     .with_max_iterations(5000)
///     .with_batch_size(50)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SaConfig {
    /// Temperature at iteration 0. Must be positive.
    pub initial_temperature: f64,

    /// Multiplicative cooling factor per iteration, in (0, 1).
    ///
    /// Higher values cool more slowly.
    pub cooling_rate: f64,

    /// Iteration budget. The engine stops advancing once it is reached.
    pub max_iterations: usize,

    /// Steps taken by one call to `SaEngine::advance`.
    pub batch_size: usize,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1500.0,
            cooling_rate: 0.995,
            max_iterations: 2000,
            batch_size: 1,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperature used by iteration `k`.
    #[inline]
    pub fn temperature_at(&self, k: usize) -> f64 {
        self.initial_temperature * self.cooling_rate.powf(k as f64)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TspError> {
        let t = self.initial_temperature;
        if t.is_nan() || t <= 0.0 {
            return Err(TspError::InvalidTemperature(t));
        }
        let r = self.cooling_rate;
        if r.is_nan() || r <= 0.0 || r >= 1.0 {
            return Err(TspError::InvalidCoolingRate(r));
        }
        if self.max_iterations == 0 {
            return Err(TspError::ZeroIterations);
        }
        if self.batch_size == 0 {
            return Err(TspError::ZeroBatchSize);
        }
        Ok(())
    }
}
