//! Contiguous train/test split of a time series

use ndarray::{s, Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default fraction of samples assigned to the training prefix
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Split settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Fraction of samples in the training set, in [0, 1]
    pub train_ratio: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_ratio: DEFAULT_TRAIN_RATIO,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<()> {
        check_ratio(self.train_ratio)
    }
}

/// Training prefix and test suffix of a series.
///
/// Signal subsets are single-channel feature matrices of shape `(count, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub t_train: Array1<f64>,
    pub y_train: Array2<f64>,
    pub t_test: Array1<f64>,
    pub y_test: Array2<f64>,
}

impl TrainTestSplit {
    /// Index of the first test sample
    pub fn split_index(&self) -> usize {
        self.t_train.len()
    }

    /// Consume into `(t_train, y_train, t_test, y_test)`
    pub fn into_parts(self) -> (Array1<f64>, Array2<f64>, Array1<f64>, Array2<f64>) {
        (self.t_train, self.y_train, self.t_test, self.y_test)
    }
}

/// Reshape a flat series of length `N` into a single-channel matrix of shape `(N, 1)`
pub fn as_feature_matrix(values: &Array1<f64>) -> Array2<f64> {
    values.to_owned().insert_axis(Axis(1))
}

/// Split `time` and `signal` at `k = floor(split · N)`.
///
/// The first `k` samples form the training set, the remaining `N - k` the test set.
/// `split = 0` gives an empty training set and `split = 1` an empty test set.
///
/// # Errors
///
/// - `Error::LengthMismatch` if `time` and `signal` differ in length
/// - `Error::InvalidSplit` if `split` is not within `[0, 1]`
pub fn train_test_split(
    time: &Array1<f64>,
    signal: &Array1<f64>,
    split: f64,
) -> Result<TrainTestSplit> {
    if time.len() != signal.len() {
        return Err(Error::LengthMismatch {
            time: time.len(),
            signal: signal.len(),
        });
    }
    check_ratio(split)?;

    let n = signal.len();
    // floor, not round; `min` guards against float overshoot at split = 1
    let k = ((split * n as f64).floor() as usize).min(n);

    debug!(samples = n, split, split_index = k, "splitting series");

    let y_train = signal.slice(s![..k]).to_owned();
    let y_test = signal.slice(s![k..]).to_owned();

    Ok(TrainTestSplit {
        t_train: time.slice(s![..k]).to_owned(),
        y_train: as_feature_matrix(&y_train),
        t_test: time.slice(s![k..]).to_owned(),
        y_test: as_feature_matrix(&y_test),
    })
}

fn check_ratio(split: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&split) {
        return Err(Error::InvalidSplit(split));
    }
    Ok(())
}
