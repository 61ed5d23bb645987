//! Synthetic noisy periodic signal
//!
//! The signal is a fixed sum of four sinusoids plus Gaussian noise:
//!
//! ```text
//! y(t) = sin(2t) + 0.3·sin(t) + 0.5·cos(t) + 1.2·cos(0.5t + 0.2) + ε,   ε ~ N(0, σ²)
//! ```
//!
//! Randomness always comes from a caller-visible generator, so a fixed seed
//! reproduces the same series.

use std::f64::consts::PI;

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Standard deviation of the additive Gaussian noise
pub const DEFAULT_NOISE_STD: f64 = 0.05;

/// Default number of time steps
pub const DEFAULT_NUM_SAMPLES: usize = 2000;

/// Default final time (40 periods of the slowest component)
pub const DEFAULT_FINAL_TIME: f64 = 80.0 * PI;

/// Time coordinate and signal values of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSeries {
    /// Evenly spaced time stamps from 0 to the final time, inclusive
    pub time: Array1<f64>,
    /// Noisy signal sampled at `time`
    pub signal: Array1<f64>,
}

impl SyntheticSeries {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }
}

/// Parameters of the synthetic signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Number of time steps
    pub num_samples: usize,
    /// Final time
    pub final_time: f64,
    /// Standard deviation of the additive noise (0 gives the clean signal)
    pub noise_std: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            num_samples: DEFAULT_NUM_SAMPLES,
            final_time: DEFAULT_FINAL_TIME,
            noise_std: DEFAULT_NOISE_STD,
            seed: None,
        }
    }
}

impl SignalConfig {
    /// Create a configuration with the default noise level
    pub fn new(num_samples: usize, final_time: f64) -> Self {
        Self {
            num_samples,
            final_time,
            ..Default::default()
        }
    }

    /// Set the noise standard deviation
    pub fn noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_samples == 0 {
            return Err(Error::InvalidParameter(
                "num_samples must be at least 1".to_string(),
            ));
        }
        if !self.final_time.is_finite() || self.final_time <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "final_time must be positive and finite, got {}",
                self.final_time
            )));
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "noise_std must be non-negative and finite, got {}",
                self.noise_std
            )));
        }
        Ok(())
    }
}

/// Generator of synthetic series from a [`SignalConfig`]
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    config: SignalConfig,
}

impl SignalGenerator {
    /// Create a new generator
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Generate a series, seeding a fresh `StdRng` when the config carries a seed
    /// and falling back to the thread-local generator otherwise.
    pub fn generate(&self) -> Result<SyntheticSeries> {
        match self.config.seed {
            Some(seed) => self.generate_with(&mut StdRng::seed_from_u64(seed)),
            None => self.generate_with(&mut rand::thread_rng()),
        }
    }

    /// Generate a series drawing noise from the given generator
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SyntheticSeries> {
        self.config.validate()?;
        synthesize(
            rng,
            self.config.num_samples,
            self.config.final_time,
            self.config.noise_std,
        )
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new(SignalConfig::default())
    }
}

/// Noiseless signal value at time `t`
pub fn clean_signal(t: f64) -> f64 {
    (2.0 * t).sin() + 0.3 * t.sin() + 0.5 * t.cos() + 1.2 * (0.5 * t + 0.2).cos()
}

/// Evenly spaced time stamps from 0 to `final_time` with the endpoint pinned exactly
pub fn time_grid(num_samples: usize, final_time: f64) -> Array1<f64> {
    if num_samples <= 1 {
        return Array1::zeros(num_samples);
    }
    let last = num_samples - 1;
    let step = final_time / last as f64;
    Array1::from_shape_fn(num_samples, |i| {
        if i == last {
            final_time
        } else {
            step * i as f64
        }
    })
}

/// Generate `nt` samples of the noisy signal on `[0, tf]`.
///
/// Noise has standard deviation [`DEFAULT_NOISE_STD`] and is drawn from `rng`.
///
/// # Errors
///
/// `Error::InvalidParameter` when `nt` is zero or `tf` is not a positive finite number.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use windowed_series::synthetic_data;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let series = synthetic_data(&mut rng, 100, 10.0).unwrap();
/// assert_eq!(series.time.len(), 100);
/// assert_eq!(series.time[99], 10.0);
/// ```
pub fn synthetic_data<R: Rng + ?Sized>(
    rng: &mut R,
    nt: usize,
    tf: f64,
) -> Result<SyntheticSeries> {
    SignalConfig::new(nt, tf).validate()?;
    synthesize(rng, nt, tf, DEFAULT_NOISE_STD)
}

fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    num_samples: usize,
    final_time: f64,
    noise_std: f64,
) -> Result<SyntheticSeries> {
    let noise = Normal::new(0.0, noise_std)
        .map_err(|e| Error::InvalidParameter(format!("noise distribution: {}", e)))?;

    let time = time_grid(num_samples, final_time);
    let signal = time.mapv(|t| clean_signal(t) + noise.sample(rng));

    debug!(num_samples, final_time, noise_std, "generated synthetic series");

    Ok(SyntheticSeries { time, signal })
}
